//! Softlayer block/file storage provider settings.
//!
//! Timeout and retry-interval fields are strings (duration expressions
//! interpreted by the consuming provider), not integers. That matches the
//! existing file contract and is deliberately not normalized here.
//!
//! The API debug flag never had a snake_case key: older decoders matched it
//! case-insensitively under `SoftlayerAPIDebug`, so the common case variants
//! are accepted as aliases.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Softlayer provider enablement, credentials, and tuning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftlayerConfig {
    pub softlayer_block_enabled: bool,
    pub softlayer_block_provider_name: String,
    pub softlayer_file_enabled: bool,
    pub softlayer_file_provider_name: String,
    #[serde(deserialize_with = "super::secret_string::deserialize", skip_serializing)]
    pub softlayer_username: Option<SecretString>,
    #[serde(deserialize_with = "super::secret_string::deserialize", skip_serializing)]
    pub softlayer_api_key: Option<SecretString>,
    pub softlayer_endpoint_url: String,
    pub softlayer_datacenter: String,
    #[serde(rename = "softlayer_api_timeout")]
    pub softlayer_timeout: String,
    pub softlayer_vol_provision_timeout: String,
    #[serde(rename = "softlayer_api_retry_interval")]
    pub softlayer_retry_interval: String,

    // JWT token signing parameters.
    pub softlayer_jwt_kid: String,
    pub softlayer_jwt_ttl: i32,
    #[serde(rename = "softlayer_jwt_valid")]
    pub softlayer_jwt_valid_from: i32,

    #[serde(rename = "softlayer_iam_endpoint_url")]
    pub softlayer_ims_endpoint_url: String,
    #[serde(
        rename = "SoftlayerAPIDebug",
        alias = "softlayerapidebug",
        alias = "SOFTLAYERAPIDEBUG"
    )]
    pub softlayer_api_debug: bool,
}
