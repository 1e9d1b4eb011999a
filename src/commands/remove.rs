//! # Remove Command Implementation
//!
//! This module implements the `remove` subcommand, which deletes one managed
//! repository instance. The path is relative to the root, exactly as printed by
//! `ghm list`. Absolute paths, `..` components and directories without a
//! `.git` marker are refused.

use anyhow::Result;
use clap::Args;

use ghm::config::Config;
use ghm::repository::RepositoryManager;
use ghm::scanner::find_repositories;
use ghm::suggestions;

/// Remove repository
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Repository path relative to the root (e.g. github.com/user/repo.1)
    #[arg(value_name = "REPOSITORY_PATH")]
    pub path: String,
}

/// Execute the `remove` command.
pub fn execute(args: RemoveArgs, config: &Config) -> Result<()> {
    let manager = RepositoryManager::new(config.root.clone());

    manager.locate(&args.path).map_err(|e| {
        let known = find_repositories(manager.root(), "").unwrap_or_default();
        suggestions::for_error(e, &known)
    })?;

    println!("Removing repository: {}", args.path);

    manager
        .remove(&args.path)
        .map_err(|e| suggestions::for_error(e, &[]))?;

    println!("Successfully removed: {}", args.path);
    Ok(())
}
