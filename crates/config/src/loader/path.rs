//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Resolve the configuration file and directory from the environment.
//!
//! Does NOT handle:
//! - File I/O. These are pure functions of an `EnvSource`; an unset
//!   workspace root degrades to a relative path that simply fails later at
//!   file-open time.

use std::path::PathBuf;

use super::env::EnvSource;
use crate::constants::{
    CONFIG_FILE_NAME, ETC_DIR_NAME, ETC_PARENT_DIRS, GOPATH_VAR, SECRET_CONFIG_PATH_VAR,
};

/// Returns the Go workspace root from the environment, or the empty string.
pub fn go_path<E: EnvSource>(env: &E) -> String {
    env.var(GOPATH_VAR).unwrap_or_default()
}

/// Returns the default `etc` directory under the Go workspace root.
pub fn etc_path<E: EnvSource>(env: &E) -> PathBuf {
    let mut path = PathBuf::from(go_path(env));
    for dir in ETC_PARENT_DIRS {
        path.push(dir);
    }
    path.push(ETC_DIR_NAME);
    path
}

/// Returns the default configuration file path under [`etc_path`].
pub fn default_conf_path<E: EnvSource>(env: &E) -> PathBuf {
    etc_path(env).join(CONFIG_FILE_NAME)
}

/// Returns the configuration file path.
///
/// A mounted secret directory (`SECRET_CONFIG_PATH`) takes precedence over
/// the workspace-derived default.
pub fn conf_path<E: EnvSource>(env: &E) -> PathBuf {
    match env.var(SECRET_CONFIG_PATH_VAR) {
        Some(dir) => PathBuf::from(dir).join(CONFIG_FILE_NAME),
        None => default_conf_path(env),
    }
}

/// Returns the configuration directory.
pub fn conf_path_dir<E: EnvSource>(env: &E) -> PathBuf {
    match env.var(SECRET_CONFIG_PATH_VAR) {
        Some(dir) => PathBuf::from(dir),
        None => etc_path(env),
    }
}
