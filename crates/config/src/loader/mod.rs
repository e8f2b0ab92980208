//! Configuration loader for the volume provider.
//!
//! Responsibilities:
//! - Resolve the configuration file path (explicit override, mounted secret
//!   directory, or workspace-derived default).
//! - Decode the TOML file, then overlay environment variables onto the
//!   decoded record.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv
//!   loading in tests.
//!
//! Does NOT handle:
//! - Validation of the merged configuration (consumer responsibility).
//! - Credential usage or any network access.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over file values.
//! - The overlay always runs, even when the file decode failed.
//! - A load always produces a `Config`; the `iks` section is always `Some`.
//! - When both steps fail, the decode error is reported and the overlay
//!   error is logged only.
//! - `load_dotenv()` must be called explicitly to enable `.env` loading.

mod env;
mod error;
pub mod path;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::types::{Config, IKSConfig};

pub use env::{EnvSource, ProcessEnv, env_var_or_none};
pub use error::ConfigError;

/// Outcome of a configuration load.
///
/// The configuration is always present, even when a step failed; callers
/// detect failure through `error`, not through absence.
#[derive(Debug)]
pub struct LoadedConfig {
    /// The merged configuration. Partially populated (or zero-valued) when
    /// `error` is set.
    pub config: Config,
    /// The first error encountered, if any step failed.
    pub error: Option<ConfigError>,
}

impl LoadedConfig {
    /// Convert into a `Result`, dropping the partial configuration on error.
    ///
    /// For callers that treat any decode or overlay failure as fatal.
    pub fn into_result(self) -> Result<Config, ConfigError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.config),
        }
    }
}

/// Configuration loader that merges a TOML file with environment overrides.
#[derive(Debug)]
pub struct ConfigLoader<E: EnvSource = ProcessEnv> {
    env: E,
    config_path: Option<PathBuf>,
}

impl ConfigLoader<ProcessEnv> {
    /// Create a loader backed by the real process environment.
    pub fn new() -> Self {
        Self::with_env_source(ProcessEnv)
    }

    /// Load variables from a `.env` file into the process environment, so a
    /// subsequent [`load`](Self::load) picks them up as overrides.
    ///
    /// Setting `DOTENV_DISABLED` to "1" or "true" skips the lookup entirely
    /// (useful for testing). A missing `.env` file is not an error.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DotenvParse`] when the `.env` file has invalid syntax,
    /// [`ConfigError::DotenvIo`] when it exists but cannot be read. Neither
    /// carries raw `.env` line contents, so secrets cannot leak through the
    /// error message.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("1") | Some("true")
        ) {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(dotenvy::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                Ok(self)
            }
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }
}

impl Default for ConfigLoader<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvSource> ConfigLoader<E> {
    /// Create a loader with an explicit environment source.
    pub fn with_env_source(env: E) -> Self {
        Self {
            env,
            config_path: None,
        }
    }

    /// Override the configuration file path, skipping resolution from the
    /// environment.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Load the configuration: decode the file, then overlay environment
    /// variables onto the decoded record.
    ///
    /// Each step's failure is logged and recorded, but never aborts the
    /// load: the overlay runs even when the decode failed, and the returned
    /// [`LoadedConfig`] always carries a configuration with its `iks`
    /// section allocated.
    pub fn load(&self) -> LoadedConfig {
        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => path::conf_path(&self.env),
        };
        info!(path = %path.display(), "loading provider configuration");

        let mut config = Config {
            iks: Some(IKSConfig::default()),
            ..Config::default()
        };
        let mut first_error = None;

        match decode_file(&path) {
            Ok(decoded) => config = decoded,
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to parse config file");
                first_error = Some(e);
            }
        }

        // The IKS block may be absent from the secret toml. Keep it
        // allocated so consumers can read it without a presence check.
        config.iks.get_or_insert_with(IKSConfig::default);

        if let Err(e) = env::apply_env(&self.env, &mut config) {
            error!(error = %e, "failed to apply environment overrides");
            first_error.get_or_insert(e);
        }

        LoadedConfig {
            config,
            error: first_error,
        }
    }
}

fn decode_file(path: &Path) -> Result<Config, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
