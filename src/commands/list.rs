//! # List Command Implementation
//!
//! This module implements the `list` subcommand, which prints every managed
//! repository (every instance included) as a path relative to the root.
//!
//! ## Functionality
//!
//! - **Pattern Filtering**: Only paths containing the given substring are shown
//! - **Branch Display**: `--branch` appends the checked-out branch, or `N/A`
//!   when it cannot be determined
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;

use ghm::config::Config;
use ghm::output::{render_entry, OutputConfig};
use ghm::repository::RepositoryManager;

/// List repositories
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show repositories whose path contains this text
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Show current branch name for each repository
    #[arg(short, long)]
    pub branch: bool,
}

/// Execute the `list` command.
pub fn execute(args: ListArgs, config: &Config, output: &OutputConfig) -> Result<()> {
    let manager = RepositoryManager::new(config.root.clone());

    for entry in manager.list(args.pattern.as_deref().unwrap_or_default(), args.branch)? {
        println!("{}", render_entry(output, &entry));
    }

    Ok(())
}
