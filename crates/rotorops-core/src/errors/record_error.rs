//! Ingestion errors and non-fatal error collection.

use super::error_code::{self, RotoropsErrorCode};
use super::RatingError;

/// A stored row that could not be turned into a `HazardRecord`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("hazard {id}: {field} {source}")]
    InvalidRating {
        id: String,
        field: &'static str,
        #[source]
        source: RatingError,
    },

    #[error("hazard {id}: column {column} is malformed: {message}")]
    InvalidColumn {
        id: String,
        column: &'static str,
        message: String,
    },
}

impl RecordError {
    /// Id of the offending row.
    pub fn record_id(&self) -> &str {
        match self {
            Self::InvalidRating { id, .. } | Self::InvalidColumn { id, .. } => id,
        }
    }
}

impl RotoropsErrorCode for RecordError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_RECORD
    }
}

/// Result of a load that skips invalid rows instead of failing.
/// Valid data is returned alongside the rejected rows' errors.
#[derive(Debug, Default)]
pub struct LoadResult<T: Default = ()> {
    /// The successfully ingested data.
    pub data: T,
    /// Rows rejected during ingestion.
    pub errors: Vec<RecordError>,
}

impl<T: Default> LoadResult<T> {
    /// Create a result with no errors.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Record a rejected row.
    pub fn add_error(&mut self, error: RecordError) {
        self.errors.push(error);
    }

    /// Returns true if no row was rejected.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of rejected rows.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
