//! Configuration loading for the cloud volume provider plugin.
//!
//! This crate defines the provider's configuration schema (server, Bluemix,
//! Softlayer, VPC, IKS, and API sections) and a loader that merges a TOML
//! file with environment-variable overrides into a single in-memory
//! structure. Environment variables win over file values; both merge steps
//! are fallible but never fatal, and a load always produces a configuration
//! the caller can inspect alongside the first error encountered.

pub mod constants;
mod loader;
pub mod types;

pub use loader::path::{conf_path, conf_path_dir, default_conf_path, etc_path, go_path};
pub use loader::{ConfigError, ConfigLoader, EnvSource, LoadedConfig, ProcessEnv, env_var_or_none};
pub use types::{
    APIConfig, BluemixConfig, Config, IKSConfig, ServerConfig, SoftlayerConfig, VPCProviderConfig,
};
