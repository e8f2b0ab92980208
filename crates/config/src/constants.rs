//! Centralized constants for volume provider configuration.
//!
//! This module contains the fixed file and environment-variable names that
//! make up the on-disk configuration contract. Changing any of these breaks
//! compatibility with existing secret mounts and deployment manifests.

// =============================================================================
// Configuration File
// =============================================================================

/// Name of the provider configuration file.
pub const CONFIG_FILE_NAME: &str = "libconfig.toml";

// =============================================================================
// Path Resolution Environment Variables
// =============================================================================

/// Directory containing the mounted secret configuration, if any.
/// When set, it replaces the GOPATH-derived default directory.
pub const SECRET_CONFIG_PATH_VAR: &str = "SECRET_CONFIG_PATH";

/// Workspace root the default configuration directory is derived from.
pub const GOPATH_VAR: &str = "GOPATH";

/// Workspace-relative directory chain between the workspace root and the
/// `etc` directory holding the default configuration file.
pub const ETC_PARENT_DIRS: [&str; 4] = ["src", "github.com", "IBM", "ibmcloud-volume-interface"];

/// Final path component of the default configuration directory.
pub const ETC_DIR_NAME: &str = "etc";
