//! Discovery of managed clones under the root directory.
//!
//! Any directory with a `.git` entry directly beneath it counts as a
//! repository. The walk does not stop at a repository, so a repository nested
//! inside another one is reported too.

use std::path::{Path, MAIN_SEPARATOR};

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Name of the version-control marker directory.
pub const GIT_MARKER: &str = ".git";

/// Whether `path` is a git working tree.
pub fn is_repository(path: &Path) -> bool {
    path.join(GIT_MARKER).exists()
}

/// List repositories under `root` whose `/`-separated relative path contains
/// `pattern`. An empty pattern matches everything.
///
/// Results come back in walk order, which is sorted by file name at every
/// level. A missing `root` yields an empty list.
///
/// # Errors
///
/// Returns [`Error::Scan`] if any directory under `root` cannot be read.
pub fn find_repositories(root: &Path, pattern: &str) -> Result<Vec<String>> {
    if !root.exists() {
        debug!("root {} does not exist", root.display());
        return Ok(Vec::new());
    }

    let mut repositories = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Scan {
            root: root.to_path_buf(),
            message: e.to_string(),
        })?;

        if !entry.file_type().is_dir() || !is_repository(entry.path()) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).map_err(|e| Error::Scan {
            root: root.to_path_buf(),
            message: format!("{}: {}", entry.path().display(), e),
        })?;
        let relative = if relative.as_os_str().is_empty() {
            ".".to_string()
        } else {
            normalize_separators(&relative.to_string_lossy())
        };

        if pattern.is_empty() || relative.contains(pattern) {
            repositories.push(relative);
        }
    }

    debug!(
        "found {} repositories under {} matching {:?}",
        repositories.len(),
        root.display(),
        pattern
    );
    Ok(repositories)
}

fn normalize_separators(path: &str) -> String {
    path.replace(MAIN_SEPARATOR, "/").replace('\\', "/")
}
