//! Output formats for a risk matrix.

pub mod json;

pub use json::JsonReporter;

use crate::matrix::RiskMatrix;

/// Renders a matrix for a consumer outside the crate.
pub trait Reporter {
    fn name(&self) -> &'static str;
    fn generate(&self, matrix: &RiskMatrix<'_>, categories: &[&str]) -> Result<String, String>;
}
