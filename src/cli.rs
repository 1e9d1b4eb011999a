//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ghm::config::Config;
use ghm::defaults::ROOT_ENV_VAR;
use ghm::output::{ColorChoice, OutputConfig};

use crate::commands;

/// ghm - manage multiple instances of the same repository
#[derive(Parser, Debug)]
#[command(name = "ghm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Directory that holds all managed repositories.
    ///
    /// Defaults to `~/ghm`.
    #[arg(long, global = true, value_name = "DIR", env = ROOT_ENV_VAR)]
    root: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone a repository into the root, optionally as a numbered instance
    Get(commands::get::GetArgs),

    /// List managed repositories, including all instances
    List(commands::list::ListArgs),

    /// Show the root directory
    Root,

    /// Remove a managed repository instance
    Remove(commands::remove::RemoveArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let config = Config::new(self.root);
        let output = OutputConfig::from_env_and_flag(self.color);

        match self.command {
            Commands::Get(args) => commands::get::execute(args, &config),
            Commands::List(args) => commands::list::execute(args, &config, &output),
            Commands::Root => commands::root::execute(&config),
            Commands::Remove(args) => commands::remove::execute(args, &config),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Log to stderr at `level`, unless `RUST_LOG` says otherwise.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
