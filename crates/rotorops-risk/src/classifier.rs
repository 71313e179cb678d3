//! Risk classification over likelihood × severity.
//!
//! Every function here is pure: records are borrowed for one render pass and
//! never modified. Ratings are validated when records are ingested, so the
//! inputs are always on the 1..=5 scale.

use rotorops_core::types::{HazardRecord, Rating};
use rustc_hash::FxHashMap;

use crate::types::{RiskAssessment, RiskBand, RiskView};

/// Score and band for a (likelihood, severity) pair.
pub fn classify(likelihood: Rating, severity: Rating) -> RiskAssessment {
    let score = likelihood.get() * severity.get();
    RiskAssessment {
        score,
        band: RiskBand::from_score(score),
    }
}

/// Records that sit in the (likelihood, severity) cell for the chosen view.
///
/// Stable: matches come back in input order. An empty cell yields an empty vec.
pub fn cell_members(
    records: &[HazardRecord],
    likelihood: Rating,
    severity: Rating,
    use_residual: bool,
) -> Vec<&HazardRecord> {
    let view = RiskView::from_residual_flag(use_residual);
    records
        .iter()
        .filter(|r| {
            let pair = view.ratings(r);
            pair.likelihood == likelihood && pair.severity == severity
        })
        .collect()
}

/// Records with the given category, or all records for `None`. Stable.
pub fn filter_by_category<'a>(
    records: &'a [HazardRecord],
    category: Option<&str>,
) -> Vec<&'a HazardRecord> {
    match category {
        None => records.iter().collect(),
        Some(c) => records.iter().filter(|r| r.category == c).collect(),
    }
}

/// Records bucketed by category, categories in first-seen order.
pub fn group_by_category(records: &[HazardRecord]) -> CategoryGroups<'_> {
    let mut groups = CategoryGroups::default();
    for record in records {
        groups.push(record);
    }
    groups
}

/// Ordered category → records mapping.
///
/// Each record lands in exactly one bucket and keeps its relative order.
#[derive(Debug, Default, Clone)]
pub struct CategoryGroups<'a> {
    groups: Vec<(&'a str, Vec<&'a HazardRecord>)>,
    index: FxHashMap<&'a str, usize>,
}

impl<'a> CategoryGroups<'a> {
    fn push(&mut self, record: &'a HazardRecord) {
        let category = record.category.as_str();
        let idx = match self.index.get(category) {
            Some(&idx) => idx,
            None => {
                self.groups.push((category, Vec::new()));
                self.index.insert(category, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[idx].1.push(record);
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&'a str> {
        self.groups.iter().map(|(c, _)| *c).collect()
    }

    /// Records of one category.
    pub fn get(&self, category: &str) -> Option<&[&'a HazardRecord]> {
        self.index
            .get(category)
            .map(|&idx| self.groups[idx].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a HazardRecord])> + '_ {
        self.groups.iter().map(|(c, rs)| (*c, rs.as_slice()))
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
