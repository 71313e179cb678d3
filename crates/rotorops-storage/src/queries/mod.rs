//! Query modules, one per table.

pub mod risk_assessments;
