//! VPC provider settings.
//!
//! Two parallel field sets cover the two API generations of the same
//! provider: the `gc_`-prefixed keys for the first generation and the
//! `g2_`-prefixed keys for the next generation. `vpc_type_enabled` selects
//! between them (`gc` takes precedence when both are populated); which set
//! must be active is validated by the consumer, not here.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Settings for a specific instance of a VPC provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VPCProviderConfig {
    #[serde(rename = "vpc_enabled")]
    pub enabled: bool,

    pub iam_client_id: String,
    #[serde(deserialize_with = "super::secret_string::deserialize", skip_serializing)]
    pub iam_client_secret: Option<SecretString>,

    /// Generation selector, valid values `gc` | `g2`.
    pub vpc_type_enabled: String,
    #[serde(rename = "provider_type")]
    pub vpc_block_provider_type: String,
    pub vpc_provider_type: String,

    // First-generation (gc) endpoints and credentials.
    #[serde(rename = "gc_riaas_endpoint_url")]
    pub endpoint_url: String,
    #[serde(rename = "gc_riaas_endpoint_private_url")]
    pub private_endpoint_url: String,
    #[serde(rename = "gc_token_exchange_endpoint_url")]
    pub token_exchange_url: String,
    #[serde(
        rename = "gc_api_key",
        deserialize_with = "super::secret_string::deserialize",
        skip_serializing
    )]
    pub api_key: Option<SecretString>,
    #[serde(rename = "gc_resource_group_id")]
    pub resource_group_id: String,
    pub vpc_api_generation: i32,
    pub api_version: String,

    // Next-generation (g2) endpoints and credentials.
    #[serde(rename = "g2_riaas_endpoint_url")]
    pub g2_endpoint_url: String,
    #[serde(rename = "g2_riaas_endpoint_private_url")]
    pub g2_endpoint_private_url: String,
    #[serde(rename = "g2_token_exchange_endpoint_url")]
    pub g2_token_exchange_url: String,
    #[serde(
        rename = "g2_api_key",
        deserialize_with = "super::secret_string::deserialize",
        skip_serializing
    )]
    pub g2_api_key: Option<SecretString>,
    #[serde(rename = "g2_resource_group_id")]
    pub g2_resource_group_id: String,
    pub g2_vpc_api_generation: i32,
    pub g2_api_version: String,

    pub encryption: bool,
    #[serde(rename = "vpc_api_timeout")]
    pub vpc_timeout: String,
    pub max_retry_attempt: i32,
    pub max_retry_gap: i32,

    /// Private token-exchange endpoint, used for all cluster types to keep
    /// private clusters working.
    #[serde(rename = "iks_token_exchange_endpoint_private_url")]
    pub iks_token_exchange_private_url: String,

    pub is_iks: bool,
}
