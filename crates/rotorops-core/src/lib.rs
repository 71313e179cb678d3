//! Core crate for the rotorops risk register.
//!
//! Everything the storage and risk crates share lives here: typed hazard
//! records, the data-access trait, errors with stable codes, layered
//! configuration, the notification event system, and tracing setup.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod traits;
pub mod tracing;
pub mod types;
