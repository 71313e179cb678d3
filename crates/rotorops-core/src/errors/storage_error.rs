//! Storage errors.

use super::error_code::{self, RotoropsErrorCode};
use super::RecordError;

/// Errors raised by a hazard store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("Serialization failed for {column}: {message}")]
    Serialization { column: String, message: String },

    #[error("Store unavailable: {message}")]
    Unavailable { message: String },

    /// A single requested row exists but failed validation.
    #[error("Invalid stored record: {0}")]
    InvalidRecord(#[from] RecordError),
}

impl RotoropsErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::InvalidRecord(_) => error_code::INVALID_RECORD,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
