//! Hazard store configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_DATABASE_PATH};

/// Configuration for the SQLite-backed hazard store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoreConfig {
    /// Database file path, relative to the project root. Default: `rotorops.db`.
    pub database_path: Option<String>,
    /// SQLite busy timeout in milliseconds. Default: 5000.
    pub busy_timeout_ms: Option<u64>,
}

impl StoreConfig {
    /// Returns the effective database path.
    pub fn effective_database_path(&self) -> &str {
        self.database_path.as_deref().unwrap_or(DEFAULT_DATABASE_PATH)
    }

    /// Returns the effective busy timeout, defaulting to 5000ms.
    pub fn effective_busy_timeout_ms(&self) -> u64 {
        self.busy_timeout_ms.unwrap_or(DEFAULT_BUSY_TIMEOUT_MS)
    }
}
