//! # High-Level Repository Management
//!
//! This module provides the `RepositoryManager`, which ties the pieces of
//! `ghm` together: it parses identifiers, picks instance numbers, asks git to
//! clone, records metadata, lists clones and removes them. Every operation
//! works against the single root directory it was created with.
//!
//! ## Design
//!
//! Anything that has to run the `git` executable goes through the
//! **`GitOperations`** trait. The main application uses
//! `DefaultGitOperations`, which wraps the functions in [`crate::git`]. Tests
//! inject their own implementation to exercise the manager without spawning
//! git or touching the network.
//!
//! Nothing here is locked. Two `ghm` processes allocating an instance for the
//! same repository at the same time can pick the same number; the existence
//! check and the clone are separate steps.

use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::instance::{find_next_instance, instance_from_dir_name};
use crate::metadata::InstanceMetadata;
use crate::reference::RepositoryReference;
use crate::scanner::{find_repositories, is_repository};

/// Placeholder shown when a branch lookup fails.
pub const UNKNOWN_BRANCH: &str = "N/A";

/// Trait for git operations - allows mocking in tests
pub trait GitOperations {
    /// Clones `url` into `destination`, creating the directory first.
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<()>;

    /// Returns the branch checked out in the repository at `path`.
    fn current_branch(&self, path: &Path) -> Result<String>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command to perform real Git operations.
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<()> {
        crate::git::clone(url, destination)
    }

    fn current_branch(&self, path: &Path) -> Result<String> {
        crate::git::current_branch(path)
    }
}

/// How `get` chooses the instance number of a new clone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstanceSelection {
    /// The canonical, unsuffixed clone (instance `0`).
    #[default]
    Default,
    /// A specific instance number.
    Number(u32),
    /// One past the highest existing numbered instance.
    Auto,
}

/// A resolved clone destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub reference: RepositoryReference,
    /// Absolute destination directory.
    pub path: PathBuf,
}

/// One line of `list` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Path relative to the root, with `/` separators.
    pub path: String,
    /// Branch name, when requested. Failed lookups hold [`UNKNOWN_BRANCH`].
    pub branch: Option<String>,
}

impl fmt::Display for ListingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.branch {
            Some(branch) => write!(f, "{} [{}]", self.path, branch),
            None => write!(f, "{}", self.path),
        }
    }
}

/// The main entry point for managing repositories under one root.
pub struct RepositoryManager {
    root: PathBuf,
    git_ops: Box<dyn GitOperations>,
}

impl RepositoryManager {
    /// Creates a new `RepositoryManager` backed by the system `git`.
    pub fn new(root: PathBuf) -> Self {
        Self::with_operations(root, Box::new(DefaultGitOperations))
    }

    /// Creates a `RepositoryManager` with a custom `GitOperations`
    /// implementation.
    pub fn with_operations(root: PathBuf, git_ops: Box<dyn GitOperations>) -> Self {
        Self { root, git_ops }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Work out where a clone of `input` should go.
    ///
    /// # Errors
    ///
    /// Any parse error from [`crate::reference::parse`], or
    /// [`Error::PathExists`] when the destination is already present.
    pub fn resolve(&self, input: &str, selection: InstanceSelection) -> Result<Checkout> {
        let reference: RepositoryReference = input.parse()?;

        let instance = match selection {
            InstanceSelection::Default => 0,
            InstanceSelection::Number(instance) => instance,
            InstanceSelection::Auto => find_next_instance(
                &self.root,
                &reference.host,
                &reference.owner,
                &reference.name,
            ),
        };

        let reference = reference.with_instance(instance);
        let path = reference.full_path(&self.root);

        if path.exists() {
            return Err(Error::PathExists { path });
        }

        Ok(Checkout { reference, path })
    }

    /// Clone a resolved checkout and record its metadata.
    ///
    /// No metadata is written if the clone fails.
    pub fn clone_checkout(&self, checkout: &Checkout) -> Result<()> {
        let url = &checkout.reference.url;
        self.git_ops.clone_repository(url, &checkout.path)?;

        InstanceMetadata::new(url.as_str(), checkout.reference.instance).save(&checkout.path)?;
        debug!(
            "recorded instance {} of {} at {}",
            checkout.reference.instance,
            url,
            checkout.path.display()
        );
        Ok(())
    }

    /// Resolve and clone in one step.
    pub fn get(&self, input: &str, selection: InstanceSelection) -> Result<Checkout> {
        let checkout = self.resolve(input, selection)?;
        self.clone_checkout(&checkout)?;
        Ok(checkout)
    }

    /// List repositories whose relative path contains `pattern`.
    ///
    /// With `with_branch`, each entry is annotated with its current branch. A
    /// failed lookup does not abort the listing; the entry gets
    /// [`UNKNOWN_BRANCH`] instead.
    pub fn list(&self, pattern: &str, with_branch: bool) -> Result<Vec<ListingEntry>> {
        let entries = find_repositories(&self.root, pattern)?
            .into_iter()
            .map(|path| {
                let branch = with_branch.then(|| self.branch_or_placeholder(&path));
                ListingEntry { path, branch }
            })
            .collect();

        Ok(entries)
    }

    fn branch_or_placeholder(&self, relative: &str) -> String {
        let path = self.root.join(relative);
        self.git_ops.current_branch(&path).unwrap_or_else(|e| {
            warn!("cannot read branch of {}: {}", relative, e);
            UNKNOWN_BRANCH.to_string()
        })
    }

    /// Find the repository at `relative` (relative to the root) without
    /// touching it.
    ///
    /// # Errors
    ///
    /// [`Error::OutsideRoot`] if `relative` is absolute, empty or contains
    /// `.`/`..` components, [`Error::RepositoryNotFound`] if nothing exists
    /// there, [`Error::NotARepository`] if it has no `.git` marker.
    pub fn locate(&self, relative: &str) -> Result<PathBuf> {
        let relative_path = Path::new(relative);
        let inside_root = relative_path.components().next().is_some()
            && relative_path
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !inside_root {
            return Err(Error::OutsideRoot {
                path: relative_path.to_path_buf(),
            });
        }

        let path = self.root.join(relative_path);

        if !path.exists() {
            return Err(Error::RepositoryNotFound {
                path: relative_path.to_path_buf(),
            });
        }

        if !is_repository(&path) {
            return Err(Error::NotARepository {
                path: relative_path.to_path_buf(),
            });
        }

        Ok(path)
    }

    /// Delete the repository at `relative` (relative to the root).
    ///
    /// Returns the absolute path that was removed.
    ///
    /// # Errors
    ///
    /// Everything [`locate`](Self::locate) reports, plus I/O errors from the
    /// deletion itself.
    pub fn remove(&self, relative: &str) -> Result<PathBuf> {
        let path = self.locate(relative)?;

        match InstanceMetadata::load(&path) {
            Ok(Some(metadata)) => debug!(
                "removing instance {} of {}",
                metadata.instance, metadata.url
            ),
            Ok(None) => debug!(
                "removing unrecorded instance {} at {}",
                instance_from_dir_name(&path),
                path.display()
            ),
            Err(e) => warn!("removing {} with unreadable metadata: {}", path.display(), e),
        }

        fs::remove_dir_all(&path)?;
        Ok(path)
    }
}
