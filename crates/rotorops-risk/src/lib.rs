//! Risk register core.
//!
//! - `classifier`: likelihood × severity scoring, banding, cell membership,
//!   category grouping
//! - `matrix`: the 25-cell display grid for one view
//! - `register`: loading hazards from a store with notifications and demo fallback
//! - `seed`: the built-in demo register
//! - `reporters`: JSON output of a matrix

pub mod classifier;
pub mod matrix;
pub mod register;
pub mod reporters;
pub mod seed;
pub mod types;

pub use classifier::{cell_members, classify, filter_by_category, group_by_category, CategoryGroups};
pub use matrix::{HazardDetail, MatrixCell, RiskMatrix};
pub use register::RiskRegister;
pub use types::{RiskAssessment, RiskBand, RiskView};
