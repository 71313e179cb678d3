//! Risk matrix configuration.

use serde::{Deserialize, Serialize};

/// Defaults for how the risk register is loaded and first displayed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RiskConfig {
    /// Start on the residual view instead of the inherent one. Default: false.
    pub show_residual: Option<bool>,
    /// Serve the demo register when the store cannot be read. Default: true.
    pub fallback_to_demo: Option<bool>,
    /// Category preselected in the filter. Default: none (all risks).
    pub default_category: Option<String>,
}

impl RiskConfig {
    pub fn effective_show_residual(&self) -> bool {
        self.show_residual.unwrap_or(false)
    }

    pub fn effective_fallback_to_demo(&self) -> bool {
        self.fallback_to_demo.unwrap_or(true)
    }

    pub fn effective_default_category(&self) -> Option<&str> {
        self.default_category.as_deref()
    }
}
