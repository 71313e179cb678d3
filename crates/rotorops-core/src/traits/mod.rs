//! Seams implemented outside this crate.

pub mod hazard_store;

pub use hazard_store::HazardStore;
