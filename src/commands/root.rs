//! # Root Command Implementation
//!
//! Prints the directory where `ghm` keeps repositories.

use anyhow::Result;

use ghm::config::Config;

/// Execute the `root` command.
pub fn execute(config: &Config) -> Result<()> {
    println!("{}", config.root.display());
    Ok(())
}
