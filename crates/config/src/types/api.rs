//! Passthrough API settings.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Settings handed through to the API layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct APIConfig {
    /// Opaque secret handed through to the API layer unchanged.
    #[serde(
        rename = "PassthroughSecret",
        deserialize_with = "super::secret_string::deserialize",
        skip_serializing
    )]
    pub passthrough_secret: Option<SecretString>,
}
