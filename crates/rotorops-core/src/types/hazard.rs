//! Hazard records as held in the `risk_assessments` collection.

use serde::{Deserialize, Serialize};

use super::Rating;

/// A mitigation measure attached to a hazard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub id: String,
    pub description: String,
}

/// A (likelihood, severity) pair for one view of a hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RatingPair {
    pub likelihood: Rating,
    pub severity: Rating,
}

impl RatingPair {
    pub fn new(likelihood: Rating, severity: Rating) -> Self {
        Self {
            likelihood,
            severity,
        }
    }
}

/// One entry in the risk register.
///
/// Field names serialize in camelCase to match the remote store's JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardRecord {
    pub id: String,
    pub hazard: String,
    pub description: String,
    #[serde(default)]
    pub consequences: Vec<String>,
    pub inherent_likelihood: Rating,
    pub inherent_severity: Rating,
    pub residual_likelihood: Rating,
    pub residual_severity: Rating,
    #[serde(default)]
    pub controls: Vec<Control>,
    #[serde(default)]
    pub responsible_person: String,
    #[serde(default)]
    pub monitoring_method: String,
    pub category: String,
}

impl HazardRecord {
    /// Ratings before controls are applied.
    pub fn inherent(&self) -> RatingPair {
        RatingPair::new(self.inherent_likelihood, self.inherent_severity)
    }

    /// Ratings after controls are applied.
    pub fn residual(&self) -> RatingPair {
        RatingPair::new(self.residual_likelihood, self.residual_severity)
    }
}
