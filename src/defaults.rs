//! Default values for ghm configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Environment variable that selects the root directory.
pub const ROOT_ENV_VAR: &str = "GHM_ROOT";

/// Directory name used under the home directory, and as the relative fallback.
pub const ROOT_DIR_NAME: &str = "ghm";

/// Returns the default root directory.
///
/// Uses `~/ghm`. Falls back to `./ghm` if the home directory cannot be
/// determined.
///
/// This can be overridden by the `--root` CLI flag or the `GHM_ROOT`
/// environment variable.
pub fn default_root() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(ROOT_DIR_NAME),
        None => PathBuf::from(".").join(ROOT_DIR_NAME),
    }
}
