//! # Repository References
//!
//! A `RepositoryReference` names a logical repository independently of any
//! particular clone of it. It is derived from whatever the user typed on the
//! command line:
//!
//! - `https://github.com/user/repo(.git)` and any other `scheme://` URL
//! - `github.com/user/repo` (shorthand, `https://` is assumed)
//! - `git@github.com:user/repo(.git)` (SCP-style SSH)
//!
//! Only the first two path segments are used for `owner` and `name`; anything
//! after them is kept in `url` but otherwise ignored. URL path segments are
//! percent-decoded, so `my%20repo` is stored as `my repo`.
//!
//! `host`, `owner` and `name` each become one directory level, so `.`, `..`
//! and anything containing a path separator are rejected.
//!
//! The reference also decides where a clone lives on disk. Instance `0` is the
//! canonical clone at `host/owner/name`; instance `n > 0` lives next to it at
//! `host/owner/name.n`.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::{Error, Result};

/// Login prefix that marks an SCP-style SSH identifier.
pub const SSH_PREFIX: &str = "git@";

/// Scheme prepended to identifiers that do not carry one.
pub const DEFAULT_SCHEME: &str = "https://";

/// Suffix stripped from the repository name.
const ARCHIVE_SUFFIX: &str = ".git";

/// A parsed repository identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    /// The URL handed to `git clone`: the input with a scheme added if it had
    /// none, or the SSH identifier unchanged.
    pub url: String,
    pub host: String,
    pub owner: String,
    /// Second path segment with any trailing `.git` removed.
    pub name: String,
    /// Which clone of the repository this refers to. Always `0` after parsing.
    pub instance: u32,
}

/// Parse a user-supplied repository identifier.
///
/// # Errors
///
/// - [`Error::EmptyInput`] for an empty string.
/// - [`Error::MalformedSsh`] for a `git@` identifier without a single `:`
///   separator or without a non-empty `owner/name` path.
/// - [`Error::MalformedUrl`] for anything else that does not parse as a URL
///   with a host and at least two non-empty path segments.
///
/// Either error is also returned when `host`, `owner` or `name` would be `.`,
/// `..` or contain a path separator.
pub fn parse(input: &str) -> Result<RepositoryReference> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    if input.starts_with(SSH_PREFIX) {
        parse_ssh(input)
    } else {
        parse_http(input)
    }
}

fn parse_http(input: &str) -> Result<RepositoryReference> {
    let malformed = |message: &str| Error::MalformedUrl {
        input: input.to_string(),
        message: message.to_string(),
    };

    let url = if input.contains("://") {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{input}")
    };

    let parsed = Url::parse(&url).map_err(|e| malformed(&e.to_string()))?;

    let host = match parsed.host_str() {
        Some(host) if is_path_component(host) => match parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        },
        _ => return Err(malformed("missing host")),
    };

    let segments = parsed
        .path_segments()
        .ok_or_else(|| malformed("expected an <owner>/<name> path"))?
        .take(2)
        .map(|segment| percent_decode_str(segment).decode_utf8().map(Cow::into_owned))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| malformed(&e.to_string()))?;

    let (owner, name) = owner_and_name(segments.iter().map(String::as_str))
        .ok_or_else(|| malformed("expected an <owner>/<name> path"))?;

    Ok(RepositoryReference {
        url,
        host,
        owner,
        name,
        instance: 0,
    })
}

fn parse_ssh(input: &str) -> Result<RepositoryReference> {
    let malformed = |message: &str| Error::MalformedSsh {
        input: input.to_string(),
        message: message.to_string(),
    };

    let (login, path) = input
        .split_once(':')
        .ok_or_else(|| malformed("missing ':' separator"))?;

    if path.contains(':') {
        return Err(malformed("expected exactly one ':' separator"));
    }

    let host = login
        .strip_prefix(SSH_PREFIX)
        .ok_or_else(|| malformed("missing 'git@' prefix"))?;
    if !is_path_component(host) {
        return Err(malformed("missing host"));
    }

    let (owner, name) = owner_and_name(path.split('/'))
        .ok_or_else(|| malformed("expected an <owner>/<name> path"))?;

    Ok(RepositoryReference {
        url: input.to_string(),
        host: host.to_string(),
        owner,
        name,
        instance: 0,
    })
}

/// First two path segments, suffix-stripped, both usable as directory names.
fn owner_and_name<'a>(mut segments: impl Iterator<Item = &'a str>) -> Option<(String, String)> {
    let owner = segments.next()?;
    let name = segments.next()?;
    let name = name.strip_suffix(ARCHIVE_SUFFIX).unwrap_or(name);

    if !is_path_component(owner) || !is_path_component(name) {
        return None;
    }

    Some((owner.to_string(), name.to_string()))
}

/// Whether `segment` names exactly one directory below its parent.
fn is_path_component(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
}

impl FromStr for RepositoryReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl RepositoryReference {
    /// Return the same repository pointing at another clone slot.
    pub fn with_instance(mut self, instance: u32) -> Self {
        self.instance = instance;
        self
    }

    /// Final path component of this clone: `name` or `name.<instance>`.
    pub fn dir_name(&self) -> String {
        if self.instance == 0 {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.instance)
        }
    }

    /// Location of this clone relative to the managed root.
    pub fn relative_path(&self) -> PathBuf {
        let dir_name = self.dir_name();
        [self.host.as_str(), self.owner.as_str(), dir_name.as_str()]
            .iter()
            .collect()
    }

    /// Location of this clone under `root`.
    pub fn full_path(&self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }
}
