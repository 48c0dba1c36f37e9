//! Tinker configuration system.
//!
//! TOML-based configuration for the LLM backend, the display bridge
//! host, and logging. Every section uses serde defaults so a partial
//! (or empty) config file works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tinker_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    AuthScheme, BackendConfig, BridgeConfig, LogLevel, LoggingConfig, TinkerConfig,
    CONFIG_SCHEMA_VERSION,
};
pub use toml_loader::{create_default_config, default_config_path, load_default, load_from_path};

use tinker_common::ConfigError;

/// Load config from the platform default path.
///
/// The loader already replaces configs that fail validation with the
/// defaults, so the result is always valid.
pub fn load_config() -> Result<TinkerConfig, ConfigError> {
    toml_loader::load_default()
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TinkerConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
