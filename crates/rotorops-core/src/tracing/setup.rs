//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Default filter when `ROTOROPS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "rotorops=info";

/// Initialize the rotorops tracing/logging system.
///
/// Reads the `ROTOROPS_LOG` environment variable for per-module log levels,
/// e.g. `ROTOROPS_LOG=rotorops_storage=debug,rotorops_risk=info`.
///
/// Idempotent: later calls are no-ops. Does nothing if another global
/// subscriber was installed first.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
