//! RotoropsErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable error code string
/// that hosts can match on without parsing messages.
pub trait RotoropsErrorCode {
    /// Returns the error code string (e.g., "STORAGE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const RATING_OUT_OF_RANGE: &str = "RATING_OUT_OF_RANGE";
pub const INVALID_RECORD: &str = "INVALID_RECORD";
pub const REGISTER_UNAVAILABLE: &str = "REGISTER_UNAVAILABLE";
