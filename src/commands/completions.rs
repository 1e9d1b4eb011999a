//! # Completions Command Implementation
//!
//! Generates shell completion scripts with `clap_complete`, covering every
//! `ghm` subcommand and flag.
//!
//! ## Example
//!
//! ```bash
//! # Generate and install bash completions
//! ghm completions bash > ~/.local/share/bash-completion/completions/ghm
//!
//! # Generate zsh completions
//! ghm completions zsh > ~/.zfunc/_ghm
//! ```

use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
///
/// Writes the script to stdout; redirect it to wherever your shell loads
/// completions from.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
