//! Typed domain records shared across the workspace.

pub mod hazard;
pub mod rating;

pub use hazard::{Control, HazardRecord, RatingPair};
pub use rating::Rating;
