//! # Configuration
//!
//! `Config` holds the settings every command needs. It is resolved once at
//! startup and passed down by reference; nothing reads the environment after
//! that.
//!
//! The root directory is chosen from, in order:
//!
//! 1. an explicit value (the `--root` flag, or `GHM_ROOT` through clap's `env`)
//! 2. [`default_root`](crate::defaults::default_root)
//!
//! Empty values are treated as unset.

use std::path::PathBuf;

use crate::defaults::default_root;

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory under which every clone lives as `host/owner/name[.N]`.
    pub root: PathBuf,
}

impl Config {
    /// Build a configuration from an optional explicit root.
    pub fn new(root: Option<PathBuf>) -> Self {
        let root = root
            .filter(|root| !root.as_os_str().is_empty())
            .unwrap_or_else(default_root);
        Self { root }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
