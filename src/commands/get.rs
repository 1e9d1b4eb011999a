//! # Get Command Implementation
//!
//! This module implements the `get` subcommand, which clones a repository into
//! `<root>/<host>/<owner>/<name>`, or into `<name>.<N>` for a numbered
//! instance.
//!
//! ## Examples
//!
//! ```bash
//! ghm get https://github.com/user/repo          # Clone to repo/
//! ghm get https://github.com/user/repo -n 1     # Clone to repo.1/
//! ghm get https://github.com/user/repo --auto   # Auto-assign next number
//! ```

use anyhow::Result;
use clap::Args;

use ghm::config::Config;
use ghm::repository::{InstanceSelection, RepositoryManager};
use ghm::suggestions;

/// Clone repository with optional instance management
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Repository URL (https://host/owner/name, host/owner/name or git@host:owner/name.git)
    #[arg(value_name = "REPOSITORY_URL")]
    pub url: String,

    /// Specify instance number (creates a name.N directory)
    #[arg(short = 'n', long, value_name = "N", conflicts_with = "auto")]
    pub number: Option<u32>,

    /// Automatically assign next available instance number
    #[arg(long)]
    pub auto: bool,
}

impl GetArgs {
    fn selection(&self) -> InstanceSelection {
        match (self.auto, self.number) {
            (true, _) => InstanceSelection::Auto,
            (false, Some(number)) => InstanceSelection::Number(number),
            (false, None) => InstanceSelection::Default,
        }
    }
}

/// Execute the `get` command.
pub fn execute(args: GetArgs, config: &Config) -> Result<()> {
    let manager = RepositoryManager::new(config.root.clone());

    let checkout = manager
        .resolve(&args.url, args.selection())
        .map_err(|e| suggestions::for_error(e, &[]))?;

    println!(
        "Cloning {} to {}",
        checkout.reference.url,
        checkout.path.display()
    );

    manager.clone_checkout(&checkout)?;

    println!("Successfully cloned to {}", checkout.path.display());
    Ok(())
}
