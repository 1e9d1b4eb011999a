//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture that owns a temporary root directory and
//! helpers for populating it with fake managed repositories.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_repo("github.com/user/repo");
//!     fixture.command().arg("list").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// A test fixture whose temporary directory serves as the ghm root.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_repo("github.com/user/repo")
///     .with_dir("github.com/user/plain");
///
/// fixture.command().arg("list").assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty root directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a fake repository (a directory holding an empty `.git` directory).
    pub fn with_repo(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .child(".git")
            .create_dir_all()
            .expect("Failed to create repository");
        self
    }

    /// Add a plain directory without a `.git` marker.
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Get the path to the root directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the root directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Create a command that uses this fixture as its root.
    ///
    /// The root is passed through `GHM_ROOT`, and colour-forcing variables are
    /// cleared so output is plain text.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ghm");
        cmd.env("GHM_ROOT", self.path())
            .env_remove("CLICOLOR_FORCE")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_repo() {
        let fixture = TestFixture::new().with_repo("github.com/user/repo");
        assert!(fixture.path().join("github.com/user/repo/.git").is_dir());
    }

    #[test]
    fn test_fixture_with_dir() {
        let fixture = TestFixture::new().with_dir("not-a-repo");
        assert!(fixture.path().join("not-a-repo").is_dir());
        assert!(!fixture.path().join("not-a-repo/.git").exists());
    }
}
