use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use log::debug;

use crate::error::{Error, Result};
use crate::scanner::is_repository;

/// Clone `url` into `destination`.
///
/// The destination directory is created before git runs, so a failed clone
/// can leave an empty directory behind. git's own progress output is passed
/// through to the terminal.
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Any authentication configured in ~/.gitconfig
pub fn clone(url: &str, destination: &Path) -> Result<()> {
    fs::create_dir_all(destination)?;

    debug!("running git clone {} {}", url, destination.display());
    let status = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(destination)
        .status()
        .map_err(|e| Error::ExternalTool {
            command: "clone".to_string(),
            message: e.to_string(),
        })?;

    if !status.success() {
        return Err(Error::ExternalTool {
            command: "clone".to_string(),
            message: format!("{} ({})", url, status),
        });
    }

    Ok(())
}

/// Name of the branch checked out in `path`.
///
/// A detached HEAD is reported as `HEAD@<short-sha>`, or just `HEAD` if the
/// commit cannot be resolved.
pub fn current_branch(path: &Path) -> Result<String> {
    if !is_repository(path) {
        return Err(Error::NotARepository {
            path: path.to_path_buf(),
        });
    }

    let branch = rev_parse(path, &["--abbrev-ref", "HEAD"])?;
    if branch != "HEAD" {
        return Ok(branch);
    }

    match rev_parse(path, &["--short", "HEAD"]) {
        Ok(sha) => Ok(format!("HEAD@{}", sha)),
        Err(e) => {
            debug!("cannot resolve detached HEAD in {}: {}", path.display(), e);
            Ok("HEAD".to_string())
        }
    }
}

fn rev_parse(path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(path)
        .arg("rev-parse")
        .args(args)
        .output()
        .map_err(|e| Error::ExternalTool {
            command: "rev-parse".to_string(),
            message: e.to_string(),
        })?;

    stdout_or_error("rev-parse", output)
}

fn stdout_or_error(command: &str, output: Output) -> Result<String> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::ExternalTool {
            command: command.to_string(),
            message: stderr.trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
