//! IKS cluster settings.

use serde::{Deserialize, Serialize};

/// IKS enablement and block provider selection.
///
/// The loader guarantees this section is always present after a load, even
/// when the file omits it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IKSConfig {
    #[serde(rename = "iks_enabled")]
    pub enabled: bool,
    pub iks_block_provider_name: String,
}
