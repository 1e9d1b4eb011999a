//! # Error Handling
//!
//! This module defines the centralized error type for `ghm`. It uses the
//! `thiserror` library to build a single `Error` enum covering every failure
//! the library can report, so callers match on one type regardless of whether
//! the problem came from URL parsing, the filesystem, or the `git` executable.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Each variant carries the path, URL or command
//!   that was involved so the message can be shown to the user as-is.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! The variants fall into four groups:
//!
//! - Repository identifier parsing (`EmptyInput`, `MalformedUrl`, `MalformedSsh`).
//! - Managed-tree state (`PathExists`, `RepositoryNotFound`, `OutsideRoot`,
//!   `NotARepository`).
//! - Filesystem access (`Scan`, `Metadata`, `Io`).
//! - The external `git` tool (`ExternalTool`).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for ghm operations
#[derive(Error, Debug)]
pub enum Error {
    /// The repository identifier was an empty string.
    #[error("repository URL cannot be empty")]
    EmptyInput,

    /// An HTTP(S) style identifier could not be turned into host/owner/name.
    #[error("invalid repository URL {input}: {message}")]
    MalformedUrl { input: String, message: String },

    /// A `git@host:owner/name` identifier did not have the expected shape.
    #[error("invalid SSH URL {input}: {message}")]
    MalformedSsh { input: String, message: String },

    /// The destination for a clone is already occupied.
    #[error("repository already exists: {}", path.display())]
    PathExists { path: PathBuf },

    /// A path passed to `remove` does not exist under the root.
    #[error("repository does not exist: {}", path.display())]
    RepositoryNotFound { path: PathBuf },

    /// A `remove` path that is absolute or climbs out of the root.
    #[error("path is not inside the root: {}", path.display())]
    OutsideRoot { path: PathBuf },

    /// The directory has no `.git` marker.
    #[error("not a git repository: {}", path.display())]
    NotARepository { path: PathBuf },

    /// Walking the root directory failed.
    #[error("failed to scan {}: {message}", root.display())]
    Scan { root: PathBuf, message: String },

    /// The `git` executable could not be started or exited with an error.
    #[error("git {command} failed: {message}")]
    ExternalTool { command: String, message: String },

    /// The `.ghm` record could not be encoded or decoded.
    #[error("invalid instance metadata at {}: {message}", path.display())]
    Metadata { path: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
