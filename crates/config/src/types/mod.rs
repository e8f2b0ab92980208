//! Configuration schema for the volume provider.
//!
//! Responsibilities:
//! - Define the root `Config` structure and its per-section sub-structures.
//! - Pin the TOML key names that make up the on-disk file contract.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//! - Cross-field validation (e.g. "exactly one VPC generation active") —
//!   that is the consuming provider's responsibility.
//!
//! Invariants:
//! - Every section is optional in the file; every scalar field defaults to
//!   its zero value (`""`, `false`, `0`) when absent from both file and
//!   environment.
//! - Secret-bearing fields use `secrecy::SecretString`: redacted in `Debug`
//!   output and skipped when the configuration is re-serialized.
//! - Section headers are lowercase, with aliases accepting the capitalized
//!   spellings older configuration files used.

mod api;
mod bluemix;
mod iks;
mod server;
mod softlayer;
mod vpc;

use serde::{Deserialize, Serialize};

pub use api::APIConfig;
pub use bluemix::BluemixConfig;
pub use iks::IKSConfig;
pub use server::ServerConfig;
pub use softlayer::SoftlayerConfig;
pub use vpc::VPCProviderConfig;

/// Module for deserializing optional secret fields.
///
/// Secrets are deserialize-only: the matching serialize path does not exist
/// because every secret field is marked `skip_serializing`.
pub(crate) mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map(|s| SecretString::new(s.into())))
    }
}

/// Root configuration for the volume provider process.
///
/// All sections are optional in the file. After a successful
/// [`ConfigLoader::load`](crate::ConfigLoader::load) the `iks` section is
/// always `Some`, even when the file omits it, so consumers can read it
/// without a presence check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Provider server settings. Expected to be present by consumers, but
    /// not enforced here.
    #[serde(alias = "Server", skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
    #[serde(alias = "Bluemix", skip_serializing_if = "Option::is_none")]
    pub bluemix: Option<BluemixConfig>,
    #[serde(alias = "Softlayer", skip_serializing_if = "Option::is_none")]
    pub softlayer: Option<SoftlayerConfig>,
    #[serde(alias = "VPC", skip_serializing_if = "Option::is_none")]
    pub vpc: Option<VPCProviderConfig>,
    #[serde(alias = "IKS", skip_serializing_if = "Option::is_none")]
    pub iks: Option<IKSConfig>,
    #[serde(alias = "API", skip_serializing_if = "Option::is_none")]
    pub api: Option<APIConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_empty_document_decodes_to_zero_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.server.is_none());
        assert!(config.bluemix.is_none());
        assert!(config.softlayer.is_none());
        assert!(config.vpc.is_none());
        assert!(config.iks.is_none());
        assert!(config.api.is_none());
    }

    #[test]
    fn test_capitalized_section_headers_accepted() {
        let doc = r#"
            [Server]
            debug_trace = true

            [VPC]
            vpc_enabled = true

            [IKS]
            iks_enabled = true

            [API]
            PassthroughSecret = "hush"
        "#;
        let config: Config = toml::from_str(doc).unwrap();
        assert!(config.server.unwrap().debug_trace);
        assert!(config.vpc.unwrap().enabled);
        assert!(config.iks.unwrap().enabled);
        assert_eq!(
            config
                .api
                .unwrap()
                .passthrough_secret
                .unwrap()
                .expose_secret(),
            "hush"
        );
    }

    #[test]
    fn test_api_debug_flag_accepts_legacy_case_variants() {
        for key in ["SoftlayerAPIDebug", "softlayerapidebug", "SOFTLAYERAPIDEBUG"] {
            let doc = format!("[softlayer]\n{key} = true\n");
            let config: Config = toml::from_str(&doc).unwrap();
            assert!(
                config.softlayer.unwrap().softlayer_api_debug,
                "{key} should decode"
            );
        }
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let doc = r#"
            [server]
            debug_trace = true
            some_future_flag = "whatever"
        "#;
        let config: Config = toml::from_str(doc).unwrap();
        assert!(config.server.unwrap().debug_trace);
    }

    #[test]
    fn test_secrets_are_redacted_in_debug_output() {
        let doc = r#"
            [api]
            PassthroughSecret = "super-secret-value"
        "#;
        let config: Config = toml::from_str(doc).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret-value"));
    }

    #[test]
    fn test_non_secret_fields_round_trip() {
        let doc = r#"
            [server]
            debug_trace = true

            [softlayer]
            softlayer_block_enabled = true
            softlayer_datacenter = "dal09"
            softlayer_jwt_ttl = 3600
        "#;
        let config: Config = toml::from_str(doc).unwrap();
        let encoded = toml::to_string(&config).unwrap();
        let decoded: Config = toml::from_str(&encoded).unwrap();

        assert!(decoded.server.unwrap().debug_trace);
        let softlayer = decoded.softlayer.unwrap();
        assert!(softlayer.softlayer_block_enabled);
        assert_eq!(softlayer.softlayer_datacenter, "dal09");
        assert_eq!(softlayer.softlayer_jwt_ttl, 3600);
    }
}
