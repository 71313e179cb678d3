//! Error handling for rotorops.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod rating_error;
pub mod record_error;
pub mod register_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::RotoropsErrorCode;
pub use rating_error::RatingError;
pub use record_error::{LoadResult, RecordError};
pub use register_error::RegisterError;
pub use storage_error::StorageError;
