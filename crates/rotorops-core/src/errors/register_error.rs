//! Risk register loading errors.

use super::error_code::{self, RotoropsErrorCode};
use super::StorageError;

/// Errors returned when the register cannot be served at all.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Risk register unavailable: {0}")]
    Unavailable(#[from] StorageError),
}

impl RotoropsErrorCode for RegisterError {
    fn error_code(&self) -> &'static str {
        error_code::REGISTER_UNAVAILABLE
    }
}
