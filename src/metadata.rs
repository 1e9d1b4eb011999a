//! The `.ghm` record kept at the top of every managed clone.
//!
//! The record remembers which URL a clone came from and which instance slot it
//! occupies. It lives inside the clone, so removing the directory removes the
//! record with it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File name of the record inside a clone.
pub const METADATA_FILENAME: &str = ".ghm";

/// Where a clone came from and which instance it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceMetadata {
    pub url: String,
    pub instance: u32,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl InstanceMetadata {
    /// A fresh record stamped with the current time.
    pub fn new(url: impl Into<String>, instance: u32) -> Self {
        let now = Utc::now();
        Self {
            url: url.into(),
            instance,
            created_at: now,
            last_updated: now,
        }
    }

    /// Path of the record inside `repo_dir`.
    pub fn path_in(repo_dir: &Path) -> PathBuf {
        repo_dir.join(METADATA_FILENAME)
    }

    /// Write the record into `repo_dir`, creating the directory if needed.
    pub fn save(&self, repo_dir: &Path) -> Result<()> {
        fs::create_dir_all(repo_dir)?;

        let path = Self::path_in(repo_dir);
        let data = serde_json::to_string_pretty(self).map_err(|e| Error::Metadata {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, data)?;
        Ok(())
    }

    /// Read the record from `repo_dir`.
    ///
    /// Returns `Ok(None)` when the directory has no record.
    pub fn load(repo_dir: &Path) -> Result<Option<Self>> {
        let path = Self::path_in(repo_dir);

        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&data)
            .map(Some)
            .map_err(|e| Error::Metadata {
                path,
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let info = InstanceMetadata::new("https://github.com/user/repo", 2);

        info.save(temp.path()).unwrap();
        let loaded = InstanceMetadata::load(temp.path()).unwrap().unwrap();

        assert_eq!(loaded.url, "https://github.com/user/repo");
        assert_eq!(loaded.instance, 2);
        assert_eq!(loaded, info);
    }

    #[test]
    fn test_save_creates_directory() {
        let temp = TempDir::new().unwrap();
        let repo_dir = temp.path().join("github.com/user/repo");

        InstanceMetadata::new("git@github.com:user/repo.git", 0)
            .save(&repo_dir)
            .unwrap();

        assert!(repo_dir.join(METADATA_FILENAME).is_file());
    }

    #[test]
    fn test_record_layout() {
        let temp = TempDir::new().unwrap();
        InstanceMetadata::new("https://github.com/user/repo", 1)
            .save(temp.path())
            .unwrap();

        let raw = fs::read_to_string(temp.path().join(METADATA_FILENAME)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["url"], "https://github.com/user/repo");
        assert_eq!(value["instance"], 1);
        assert!(value["created_at"].is_string());
        assert!(value["last_updated"].is_string());
        assert!(raw.contains("\n  \"url\""), "expected two-space indentation");
    }

    #[test]
    fn test_load_accepts_offset_timestamps() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(METADATA_FILENAME),
            r#"{
  "url": "https://github.com/user/repo",
  "instance": 3,
  "created_at": "2024-05-01T10:00:00+09:00",
  "last_updated": "2024-05-01T10:00:00.123456789+09:00"
}"#,
        )
        .unwrap();

        let loaded = InstanceMetadata::load(temp.path()).unwrap().unwrap();
        assert_eq!(loaded.instance, 3);
        assert_eq!(loaded.created_at.to_rfc3339(), "2024-05-01T01:00:00+00:00");
    }

    #[test]
    fn test_load_missing_record() {
        let temp = TempDir::new().unwrap();
        assert!(InstanceMetadata::load(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_invalid_record() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(METADATA_FILENAME), "not json").unwrap();

        let result = InstanceMetadata::load(temp.path());
        assert!(matches!(result, Err(Error::Metadata { .. })));
    }
}
