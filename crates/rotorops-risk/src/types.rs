//! Risk bands, assessments, and views.

use std::fmt;
use std::ops::RangeInclusive;

use rotorops_core::types::{HazardRecord, Rating, RatingPair};
use serde::{Deserialize, Serialize};

/// Qualitative risk band derived from a likelihood × severity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Medium,
    High,
    Extreme,
}

impl RiskBand {
    /// All bands, least severe first.
    pub const ALL: [RiskBand; 4] = [Self::Low, Self::Medium, Self::High, Self::Extreme];

    /// Band for a score. 20–25 Extreme, 13–19 High, 6–12 Medium, otherwise Low.
    pub fn from_score(score: u8) -> Self {
        if score >= 20 {
            Self::Extreme
        } else if score >= 13 {
            Self::High
        } else if score >= 6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Extreme => "Extreme",
        }
    }

    /// Scores that fall in this band.
    pub fn score_range(&self) -> RangeInclusive<u8> {
        match self {
            Self::Low => 1..=5,
            Self::Medium => 6..=12,
            Self::High => 13..=19,
            Self::Extreme => 20..=25,
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Score and band for one (likelihood, severity) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub band: RiskBand,
}

impl RiskAssessment {
    /// Display label, e.g. `Extreme (20)`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.band, self.score)
    }
}

/// Which pair of ratings drives the matrix: before or after controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskView {
    #[default]
    Inherent,
    Residual,
}

impl RiskView {
    pub fn from_residual_flag(use_residual: bool) -> Self {
        if use_residual {
            Self::Residual
        } else {
            Self::Inherent
        }
    }

    pub fn is_residual(&self) -> bool {
        matches!(self, Self::Residual)
    }

    /// The other view.
    pub fn toggled(&self) -> Self {
        Self::from_residual_flag(!self.is_residual())
    }

    /// The record's ratings for this view.
    pub fn ratings(&self, record: &HazardRecord) -> RatingPair {
        match self {
            Self::Inherent => record.inherent(),
            Self::Residual => record.residual(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Inherent => "Inherent Risk Matrix (Before Controls)",
            Self::Residual => "Residual Risk Matrix (After Controls)",
        }
    }

    /// Caption for the view toggle.
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Inherent => "Showing Inherent Risk",
            Self::Residual => "Showing Residual Risk",
        }
    }
}

/// Likelihood axis names, index 0 = rating 1.
pub const LIKELIHOOD_LEVELS: [&str; 5] = ["Rare", "Unlikely", "Possible", "Likely", "Almost Certain"];

/// Severity axis names, index 0 = rating 1.
pub const SEVERITY_LEVELS: [&str; 5] = ["Negligible", "Minor", "Moderate", "Major", "Catastrophic"];

pub fn likelihood_level(rating: Rating) -> &'static str {
    LIKELIHOOD_LEVELS[usize::from(rating.get()) - 1]
}

pub fn severity_level(rating: Rating) -> &'static str {
    SEVERITY_LEVELS[usize::from(rating.get()) - 1]
}
