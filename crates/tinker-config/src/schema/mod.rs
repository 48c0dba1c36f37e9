//! Configuration schema types for Tinker.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod backend;
mod bridge;
mod logging;

pub use backend::*;
pub use bridge::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Tinker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TinkerConfig {
    pub backend: BackendConfig,
    pub bridge: BridgeConfig,
    pub logging: LoggingConfig,
}
