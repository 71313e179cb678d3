//! Configuration system for rotorops.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod portal_config;
pub mod risk_config;
pub mod store_config;

pub use portal_config::{ConfigOverrides, PortalConfig};
pub use risk_config::RiskConfig;
pub use store_config::StoreConfig;
