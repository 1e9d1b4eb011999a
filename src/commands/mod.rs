//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `ghm`
//! command-line tool. Each subcommand is defined in its own file to keep the
//! logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and the resolved
//!   [`Config`](ghm::config::Config) and performs the command's logic.
//!
//! The `execute` function prints results to stdout and leaves error reporting
//! to `main`.

pub mod completions;
pub mod get;
pub mod list;
pub mod remove;
pub mod root;
