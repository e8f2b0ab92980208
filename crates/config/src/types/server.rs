//! Provider server settings.

use serde::{Deserialize, Serialize};

/// Settings for the provider server itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Enables debug-level tracing within the provider code.
    pub debug_trace: bool,
}
