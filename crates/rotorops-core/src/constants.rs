//! Shared constants for the rotorops workspace.

/// rotorops version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Remote collection holding hazard records.
pub const RISK_ASSESSMENTS_COLLECTION: &str = "risk_assessments";

/// Default SQLite database file name, relative to the project root.
pub const DEFAULT_DATABASE_PATH: &str = "rotorops.db";

/// Default SQLite busy timeout in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Number of points on the likelihood and severity scales.
pub const RATING_SCALE: usize = 5;

/// Number of cells in the risk matrix.
pub const MATRIX_CELL_COUNT: usize = RATING_SCALE * RATING_SCALE;

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "rotorops.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "ROTOROPS_LOG";
