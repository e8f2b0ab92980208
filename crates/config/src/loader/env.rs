//! Environment variable access and overlay for configuration.
//!
//! Responsibilities:
//! - Abstract environment lookup behind the `EnvSource` trait so loads can
//!   be tested deterministically without mutating the process environment.
//! - Apply per-field environment overrides onto an already-decoded `Config`.
//!
//! Does NOT handle:
//! - File decoding or path resolution (see `mod.rs` / `path.rs`).
//! - `.env` file loading (see `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Environment variables take precedence over file values.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid boolean/integer values return `ConfigError::InvalidValue`.
//! - A variable targeting an absent section allocates that section before
//!   the field is written.

use std::collections::HashMap;

use super::error::ConfigError;
use crate::types::Config;

/// Lookup capability for environment variables.
///
/// The overlay and path-resolution logic is written against this trait;
/// production code uses [`ProcessEnv`], tests usually use a
/// `HashMap<String, String>`.
pub trait EnvSource {
    /// Look up a variable, returning `None` when it is unset, empty, or
    /// whitespace-only. Returned values are trimmed.
    fn var(&self, key: &str) -> Option<String>;
}

/// `EnvSource` backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env_var_or_none(key)
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }
}

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value (leading/trailing whitespace
/// removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            // Trimming was needed, allocate new String
            Some(trimmed.to_string())
        }
    })
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be true or false".to_string(),
    })
}

fn parse_i32(var: &str, raw: &str) -> Result<i32, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a number".to_string(),
    })
}

/// Apply environment variable overrides to a decoded configuration.
///
/// Environment variables take precedence over file values. The mapping from
/// variable to field is declared exhaustively below; fields without an entry
/// are fixed by the file alone.
pub(super) fn apply_env<E: EnvSource>(env: &E, config: &mut Config) -> Result<(), ConfigError> {
    apply_server_env(env, config)?;
    apply_softlayer_env(env, config)?;
    apply_vpc_env(env, config)?;
    apply_iks_env(env, config)?;
    Ok(())
}

fn apply_server_env<E: EnvSource>(env: &E, config: &mut Config) -> Result<(), ConfigError> {
    if let Some(raw) = env.var("DEBUG_TRACE") {
        config.server.get_or_insert_with(Default::default).debug_trace =
            parse_bool("DEBUG_TRACE", &raw)?;
    }
    Ok(())
}

fn apply_softlayer_env<E: EnvSource>(env: &E, config: &mut Config) -> Result<(), ConfigError> {
    let softlayer = &mut config.softlayer;
    if let Some(raw) = env.var("SOFTLAYER_BLOCK_ENABLED") {
        softlayer
            .get_or_insert_with(Default::default)
            .softlayer_block_enabled = parse_bool("SOFTLAYER_BLOCK_ENABLED", &raw)?;
    }
    if let Some(name) = env.var("SOFTLAYER_BLOCK_PROVIDER_NAME") {
        softlayer
            .get_or_insert_with(Default::default)
            .softlayer_block_provider_name = name;
    }
    if let Some(raw) = env.var("SOFTLAYER_FILE_ENABLED") {
        softlayer
            .get_or_insert_with(Default::default)
            .softlayer_file_enabled = parse_bool("SOFTLAYER_FILE_ENABLED", &raw)?;
    }
    if let Some(name) = env.var("SOFTLAYER_FILE_PROVIDER_NAME") {
        softlayer
            .get_or_insert_with(Default::default)
            .softlayer_file_provider_name = name;
    }
    if let Some(timeout) = env.var("SOFTLAYER_API_TIMEOUT") {
        softlayer
            .get_or_insert_with(Default::default)
            .softlayer_timeout = timeout;
    }
    if let Some(timeout) = env.var("SOFTLAYER_VOL_PROVISION_TIMEOUT") {
        softlayer
            .get_or_insert_with(Default::default)
            .softlayer_vol_provision_timeout = timeout;
    }
    if let Some(interval) = env.var("SOFTLAYER_API_RETRY_INTERVAL") {
        softlayer
            .get_or_insert_with(Default::default)
            .softlayer_retry_interval = interval;
    }
    Ok(())
}

fn apply_vpc_env<E: EnvSource>(env: &E, config: &mut Config) -> Result<(), ConfigError> {
    let vpc = &mut config.vpc;
    if let Some(raw) = env.var("VPC_ENABLED") {
        vpc.get_or_insert_with(Default::default).enabled = parse_bool("VPC_ENABLED", &raw)?;
    }
    if let Some(selector) = env.var("VPC_TYPE_ENABLED") {
        vpc.get_or_insert_with(Default::default).vpc_type_enabled = selector;
    }
    if let Some(raw) = env.var("VPC_API_GENERATION") {
        vpc.get_or_insert_with(Default::default).vpc_api_generation =
            parse_i32("VPC_API_GENERATION", &raw)?;
    }
    if let Some(version) = env.var("VPC_API_VERSION") {
        vpc.get_or_insert_with(Default::default).api_version = version;
    }
    if let Some(raw) = env.var("G2_VPC_API_GENERATION") {
        vpc.get_or_insert_with(Default::default).g2_vpc_api_generation =
            parse_i32("G2_VPC_API_GENERATION", &raw)?;
    }
    if let Some(version) = env.var("G2_VPC_API_VERSION") {
        vpc.get_or_insert_with(Default::default).g2_api_version = version;
    }
    if let Some(timeout) = env.var("VPC_API_TIMEOUT") {
        vpc.get_or_insert_with(Default::default).vpc_timeout = timeout;
    }
    if let Some(raw) = env.var("VPC_RETRY_ATTEMPT") {
        vpc.get_or_insert_with(Default::default).max_retry_attempt =
            parse_i32("VPC_RETRY_ATTEMPT", &raw)?;
    }
    if let Some(raw) = env.var("VPC_RETRY_INTERVAL") {
        vpc.get_or_insert_with(Default::default).max_retry_gap =
            parse_i32("VPC_RETRY_INTERVAL", &raw)?;
    }
    Ok(())
}

fn apply_iks_env<E: EnvSource>(env: &E, config: &mut Config) -> Result<(), ConfigError> {
    let iks = &mut config.iks;
    if let Some(raw) = env.var("IKS_ENABLED") {
        iks.get_or_insert_with(Default::default).enabled = parse_bool("IKS_ENABLED", &raw)?;
    }
    if let Some(name) = env.var("IKS_BLOCK_PROVIDER_NAME") {
        iks.get_or_insert_with(Default::default).iks_block_provider_name = name;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Config, ServerConfig, VPCProviderConfig};
    use serial_test::serial;

    fn map_env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key = "_VOLUME_CONFIG_TEST_VAR";
        assert!(env_var_or_none(key).is_none(), "unset var should be None");

        temp_env::with_vars([(key, Some(""))], || {
            assert!(env_var_or_none(key).is_none(), "empty var should be None");
        });

        temp_env::with_vars([(key, Some("   "))], || {
            assert!(
                env_var_or_none(key).is_none(),
                "whitespace-only var should be None"
            );
        });

        temp_env::with_vars([(key, Some(" dal09 "))], || {
            assert_eq!(env_var_or_none(key), Some("dal09".to_string()));
        });
    }

    #[test]
    fn test_map_env_source_filters_like_process_env() {
        let env = map_env(&[("A", ""), ("B", "  "), ("C", " value ")]);
        assert!(env.var("A").is_none());
        assert!(env.var("B").is_none());
        assert_eq!(env.var("C"), Some("value".to_string()));
        assert!(env.var("MISSING").is_none());
    }

    #[test]
    fn test_overlay_overrides_file_values() {
        let mut config = Config {
            server: Some(ServerConfig { debug_trace: false }),
            ..Config::default()
        };
        let env = map_env(&[("DEBUG_TRACE", "true")]);

        apply_env(&env, &mut config).unwrap();
        assert!(config.server.unwrap().debug_trace, "environment wins");
    }

    #[test]
    fn test_overlay_allocates_absent_sections() {
        let mut config = Config::default();
        let env = map_env(&[
            ("SOFTLAYER_BLOCK_ENABLED", "true"),
            ("SOFTLAYER_BLOCK_PROVIDER_NAME", "SOFTLAYER-BLOCK"),
            ("VPC_ENABLED", "true"),
            ("IKS_ENABLED", "true"),
        ]);

        apply_env(&env, &mut config).unwrap();

        let softlayer = config.softlayer.unwrap();
        assert!(softlayer.softlayer_block_enabled);
        assert_eq!(softlayer.softlayer_block_provider_name, "SOFTLAYER-BLOCK");
        assert!(config.vpc.unwrap().enabled);
        assert!(config.iks.unwrap().enabled);
    }

    #[test]
    fn test_overlay_leaves_untagged_fields_alone() {
        let mut config = Config {
            vpc: Some(VPCProviderConfig {
                endpoint_url: "https://us-south.iaas.cloud.ibm.com".to_string(),
                ..VPCProviderConfig::default()
            }),
            ..Config::default()
        };
        let env = map_env(&[("VPC_API_GENERATION", "2")]);

        apply_env(&env, &mut config).unwrap();

        let vpc = config.vpc.unwrap();
        assert_eq!(vpc.vpc_api_generation, 2);
        assert_eq!(vpc.endpoint_url, "https://us-south.iaas.cloud.ibm.com");
    }

    #[test]
    fn test_overlay_rejects_non_numeric_generation() {
        let mut config = Config::default();
        let env = map_env(&[("VPC_API_GENERATION", "notanumber")]);

        let err = apply_env(&env, &mut config).unwrap_err();
        match err {
            ConfigError::InvalidValue { var, .. } => assert_eq!(var, "VPC_API_GENERATION"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_overlay_rejects_non_boolean_flag() {
        let mut config = Config::default();
        let env = map_env(&[("DEBUG_TRACE", "yes")]);

        let err = apply_env(&env, &mut config).unwrap_err();
        assert!(err.is_overlay());
        assert!(!err.is_decode());
    }

    #[test]
    fn test_string_overrides_are_not_type_checked() {
        // Timeouts are string-typed in the schema, so any non-empty value
        // passes through verbatim.
        let mut config = Config::default();
        let env = map_env(&[("VPC_API_TIMEOUT", "120s"), ("VPC_RETRY_INTERVAL", "10")]);

        apply_env(&env, &mut config).unwrap();

        let vpc = config.vpc.unwrap();
        assert_eq!(vpc.vpc_timeout, "120s");
        assert_eq!(vpc.max_retry_gap, 10);
    }
}
