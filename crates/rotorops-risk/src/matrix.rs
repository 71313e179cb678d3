//! The 5×5 risk matrix for one view.
//!
//! Rows run from likelihood 5 ("Almost Certain") at the top down to 1, and
//! columns from severity 1 ("Negligible") to 5, the layout the matrix is
//! read in.

use rotorops_core::constants::{MATRIX_CELL_COUNT, RATING_SCALE};
use rotorops_core::types::{HazardRecord, Rating};
use serde::Serialize;
use smallvec::SmallVec;

use crate::classifier::classify;
use crate::types::{likelihood_level, severity_level, RiskAssessment, RiskBand, RiskView};

/// One grid cell and the hazards in it.
#[derive(Debug, Clone)]
pub struct MatrixCell<'a> {
    pub likelihood: Rating,
    pub severity: Rating,
    pub assessment: RiskAssessment,
    pub members: SmallVec<[&'a HazardRecord; 4]>,
}

impl MatrixCell<'_> {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Number of hazards per band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BandCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub extreme: usize,
}

impl BandCounts {
    pub fn get(&self, band: RiskBand) -> usize {
        match band {
            RiskBand::Low => self.low,
            RiskBand::Medium => self.medium,
            RiskBand::High => self.high,
            RiskBand::Extreme => self.extreme,
        }
    }

    fn add(&mut self, band: RiskBand, n: usize) {
        match band {
            RiskBand::Low => self.low += n,
            RiskBand::Medium => self.medium += n,
            RiskBand::High => self.high += n,
            RiskBand::Extreme => self.extreme += n,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.extreme
    }
}

/// Legend entry: a band and its score range, e.g. `Medium (6-12)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub band: RiskBand,
    pub min_score: u8,
    pub max_score: u8,
}

impl LegendEntry {
    pub fn label(&self) -> String {
        format!("{} ({}-{})", self.band, self.min_score, self.max_score)
    }
}

/// Legend for all bands, Low first.
pub fn legend() -> Vec<LegendEntry> {
    RiskBand::ALL
        .iter()
        .map(|&band| {
            let range = band.score_range();
            LegendEntry {
                band,
                min_score: *range.start(),
                max_score: *range.end(),
            }
        })
        .collect()
}

/// The full grid for one view.
#[derive(Debug, Clone)]
pub struct RiskMatrix<'a> {
    view: RiskView,
    /// Row-major, top row first.
    cells: Vec<MatrixCell<'a>>,
}

impl<'a> RiskMatrix<'a> {
    /// Bucket `records` into the grid in one pass. Within a cell, records keep
    /// their input order.
    pub fn build<I>(records: I, view: RiskView) -> Self
    where
        I: IntoIterator<Item = &'a HazardRecord>,
    {
        let mut cells = Vec::with_capacity(MATRIX_CELL_COUNT);
        for &likelihood in Rating::ALL.iter().rev() {
            for &severity in Rating::ALL.iter() {
                cells.push(MatrixCell {
                    likelihood,
                    severity,
                    assessment: classify(likelihood, severity),
                    members: SmallVec::new(),
                });
            }
        }

        let mut matrix = Self { view, cells };
        let mut placed = 0usize;
        for record in records {
            let pair = view.ratings(record);
            let idx = Self::index_of(pair.likelihood, pair.severity);
            matrix.cells[idx].members.push(record);
            placed += 1;
        }
        tracing::debug!(view = ?view, hazards = placed, "risk matrix built");
        matrix
    }

    fn index_of(likelihood: Rating, severity: Rating) -> usize {
        let row = RATING_SCALE - usize::from(likelihood.get());
        let col = usize::from(severity.get()) - 1;
        row * RATING_SCALE + col
    }

    pub fn view(&self) -> RiskView {
        self.view
    }

    pub fn title(&self) -> &'static str {
        self.view.title()
    }

    /// The cell at (likelihood, severity).
    pub fn cell(&self, likelihood: Rating, severity: Rating) -> &MatrixCell<'a> {
        &self.cells[Self::index_of(likelihood, severity)]
    }

    /// All 25 cells, row-major from the top-left.
    pub fn cells(&self) -> &[MatrixCell<'a>] {
        &self.cells
    }

    /// Rows top to bottom, each with its likelihood axis label.
    pub fn rows(&self) -> impl Iterator<Item = (Rating, &'static str, &[MatrixCell<'a>])> + '_ {
        self.cells.chunks(RATING_SCALE).map(|row| {
            let likelihood = row[0].likelihood;
            (likelihood, likelihood_level(likelihood), row)
        })
    }

    /// Column headers left to right.
    pub fn severity_axis(&self) -> [(Rating, &'static str); RATING_SCALE] {
        Rating::ALL.map(|s| (s, severity_level(s)))
    }

    /// Hazard counts per band for this view.
    pub fn band_counts(&self) -> BandCounts {
        let mut counts = BandCounts::default();
        for cell in &self.cells {
            counts.add(cell.assessment.band, cell.members.len());
        }
        counts
    }

    /// Total hazards placed on the grid.
    pub fn hazard_count(&self) -> usize {
        self.cells.iter().map(|c| c.members.len()).sum()
    }
}

/// Everything the detail view shows for one hazard.
#[derive(Debug, Clone)]
pub struct HazardDetail<'a> {
    pub record: &'a HazardRecord,
    pub inherent: RiskAssessment,
    pub residual: RiskAssessment,
}

impl<'a> HazardDetail<'a> {
    pub fn of(record: &'a HazardRecord) -> Self {
        Self {
            record,
            inherent: classify(record.inherent_likelihood, record.inherent_severity),
            residual: classify(record.residual_likelihood, record.residual_severity),
        }
    }

    /// e.g. `Extreme (20)`.
    pub fn inherent_label(&self) -> String {
        self.inherent.label()
    }

    pub fn residual_label(&self) -> String {
        self.residual.label()
    }

    /// Score reduction achieved by the controls.
    pub fn score_reduction(&self) -> i16 {
        i16::from(self.inherent.score) - i16::from(self.residual.score)
    }
}
