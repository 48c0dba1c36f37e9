//! Full configuration validation.
//!
//! Validates numeric ranges and required strings. Each section has its
//! own validator; this orchestrator calls them all and collects the
//! errors into a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::TinkerConfig;
use tinker_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TinkerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_backend(&mut errors, config);
    sections::validate_bridge(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
