//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for file decoding and environment overlay failures.
//! - Classify errors so callers can tell which merge step failed.
//!
//! Invariants:
//! - All variants carry context for debugging (variable names, paths).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret
//!   leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
///
/// None of these are fatal inside the loader: a load always produces a
/// [`Config`](crate::Config) alongside at most one of these.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file is missing or unreadable.
    #[error("failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML, or a value does not match
    /// its field's type.
    #[error("failed to parse config file at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An environment variable is set but cannot be converted to the type
    /// of the field it overrides.
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// True for failures of the file-decode step.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }

    /// True for failures of the environment-overlay step.
    pub fn is_overlay(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }
}
