//! Likelihood/severity rating errors.

use super::error_code::{self, RotoropsErrorCode};

/// A rating outside the 1..=5 scale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    #[error("rating {value} is outside 1..=5")]
    OutOfRange { value: i64 },
}

impl RotoropsErrorCode for RatingError {
    fn error_code(&self) -> &'static str {
        error_code::RATING_OUT_OF_RANGE
    }
}
