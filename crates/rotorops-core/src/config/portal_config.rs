//! Top-level portal configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{RiskConfig, StoreConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`ROTOROPS_*`)
/// 3. Project config (`rotorops.toml` in project root)
/// 4. User config (`~/.rotorops/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PortalConfig {
    pub store: StoreConfig,
    pub risk: RiskConfig,
}

/// Override values supplied by the host, e.g. from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database_path: Option<String>,
    pub show_residual: Option<bool>,
    pub fallback_to_demo: Option<bool>,
}

impl PortalConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &PortalConfig) -> Result<(), ConfigError> {
        if let Some(ref path) = config.store.database_path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "store.database_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config.store.busy_timeout_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "store.busy_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref category) = config.risk.default_category {
            if category.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "risk.default_category".to_string(),
                    message: "must not be empty; omit it to show all risks".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Resolve the database path against the project root.
    pub fn database_path(&self, root: &Path) -> PathBuf {
        let path = Path::new(self.store.effective_database_path());
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }

    /// Returns the user config path: `~/.rotorops/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".rotorops").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut PortalConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PortalConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut PortalConfig, other: &PortalConfig) {
        if other.store.database_path.is_some() {
            base.store.database_path = other.store.database_path.clone();
        }
        if other.store.busy_timeout_ms.is_some() {
            base.store.busy_timeout_ms = other.store.busy_timeout_ms;
        }

        if other.risk.show_residual.is_some() {
            base.risk.show_residual = other.risk.show_residual;
        }
        if other.risk.fallback_to_demo.is_some() {
            base.risk.fallback_to_demo = other.risk.fallback_to_demo;
        }
        if other.risk.default_category.is_some() {
            base.risk.default_category = other.risk.default_category.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut PortalConfig) {
        if let Ok(val) = std::env::var("ROTOROPS_STORE_DATABASE_PATH") {
            config.store.database_path = Some(val);
        }
        if let Ok(val) = std::env::var("ROTOROPS_STORE_BUSY_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.store.busy_timeout_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ROTOROPS_RISK_SHOW_RESIDUAL") {
            if let Ok(v) = val.parse::<bool>() {
                config.risk.show_residual = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ROTOROPS_RISK_FALLBACK_TO_DEMO") {
            if let Ok(v) = val.parse::<bool>() {
                config.risk.fallback_to_demo = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ROTOROPS_RISK_DEFAULT_CATEGORY") {
            config.risk.default_category = Some(val);
        }
    }

    fn apply_overrides(config: &mut PortalConfig, o: &ConfigOverrides) {
        if let Some(ref v) = o.database_path {
            config.store.database_path = Some(v.clone());
        }
        if let Some(v) = o.show_residual {
            config.risk.show_residual = Some(v);
        }
        if let Some(v) = o.fallback_to_demo {
            config.risk.fallback_to_demo = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
