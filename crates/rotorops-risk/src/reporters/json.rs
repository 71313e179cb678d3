//! JSON reporter: the matrix as a presentation layer consumes it.

use serde_json::json;

use super::Reporter;
use crate::matrix::{legend, RiskMatrix};

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, matrix: &RiskMatrix<'_>, categories: &[&str]) -> Result<String, String> {
        let rows: Vec<serde_json::Value> = matrix
            .rows()
            .map(|(likelihood, label, cells)| {
                json!({
                    "likelihood": likelihood.get(),
                    "label": label,
                    "cells": cells.iter().map(|c| json!({
                        "likelihood": c.likelihood.get(),
                        "severity": c.severity.get(),
                        "score": c.assessment.score,
                        "band": c.assessment.band,
                        "hazards": c.members.iter().map(|r| json!({
                            "id": r.id,
                            "hazard": r.hazard,
                            "category": r.category,
                        })).collect::<Vec<_>>(),
                    })).collect::<Vec<_>>(),
                })
            })
            .collect();

        let severity_axis: Vec<serde_json::Value> = matrix
            .severity_axis()
            .iter()
            .map(|(s, label)| json!({ "severity": s.get(), "label": label }))
            .collect();

        let legend: Vec<serde_json::Value> = legend()
            .iter()
            .map(|e| {
                json!({
                    "band": e.band,
                    "min_score": e.min_score,
                    "max_score": e.max_score,
                    "label": e.label(),
                })
            })
            .collect();

        let output = json!({
            "view": matrix.view(),
            "title": matrix.title(),
            "caption": matrix.view().caption(),
            "hazard_count": matrix.hazard_count(),
            "band_counts": matrix.band_counts(),
            "severity_axis": severity_axis,
            "rows": rows,
            "legend": legend,
            "categories": categories,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
