//! # ghm Library
//!
//! This library provides the core functionality behind the `ghm` command-line
//! tool: keeping clones of git repositories in a `host/owner/name` tree, with
//! room for several parallel clones ("instances") of the same repository.
//!
//! ## Quick Example
//!
//! ```
//! use std::path::Path;
//! use ghm::reference;
//!
//! let repo = reference::parse("git@github.com:user/repo.git").unwrap();
//! assert_eq!(repo.host, "github.com");
//! assert_eq!(repo.owner, "user");
//! assert_eq!(repo.name, "repo");
//!
//! // The second parallel clone lives next to the first one
//! let second = repo.with_instance(2);
//! assert_eq!(
//!     second.full_path(Path::new("/home/me/ghm")),
//!     Path::new("/home/me/ghm/github.com/user/repo.2")
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - **References (`reference`)**: Parse HTTPS, shorthand and SSH identifiers
//!   into a host/owner/name triple, and map a triple plus instance number to a
//!   directory.
//! - **Instances (`instance`)**: Find the next free instance number by probing
//!   the filesystem.
//! - **Scanning (`scanner`)**: Walk the root and report every directory that
//!   holds a `.git` marker.
//! - **Metadata (`metadata`)**: The `.ghm` JSON record written into each clone.
//! - **Repository Management (`repository`, `git`)**: `RepositoryManager` runs
//!   `get`, `list` and `remove` on top of the pieces above, with all `git`
//!   invocations behind the `GitOperations` trait.
//!
//! Configuration is an explicit [`config::Config`] value; the library never
//! reads global state after it has been built.

pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod instance;
pub mod metadata;
pub mod output;
pub mod reference;
pub mod repository;
pub mod scanner;
pub mod suggestions;

#[cfg(test)]
mod reference_proptest;
