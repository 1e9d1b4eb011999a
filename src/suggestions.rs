//! # Error Suggestions
//!
//! This module turns library errors into messages with hints. Following CLI
//! recommendations, errors should tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ghm::suggestions;
//!
//! manager.remove(path).map_err(|e| suggestions::for_error(e, &known_paths))?;
//! ```

use std::path::Path;

use crate::error::Error;

/// Convert a library error into a user-facing error, adding hints where ghm
/// knows how the user can recover.
///
/// `known_paths` are managed repository paths used for "did you mean"
/// suggestions; pass an empty slice when none are at hand.
pub fn for_error(error: Error, known_paths: &[String]) -> anyhow::Error {
    match error {
        Error::PathExists { path } => path_exists(&path),
        Error::RepositoryNotFound { path } => repository_not_found(&path, known_paths),
        Error::OutsideRoot { path } => outside_root(&path),
        Error::NotARepository { path } => not_a_repository(&path),
        Error::EmptyInput | Error::MalformedUrl { .. } | Error::MalformedSsh { .. } => {
            malformed_identifier(&error)
        }
        other => other.into(),
    }
}

/// Generate an error for a clone destination that is already occupied.
pub fn path_exists(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "repository already exists: {path}\n\n\
         hint: Use --auto to clone into the next free instance\n\
         hint: Use -n/--number <N> to pick an instance yourself",
        path = path.display()
    )
}

/// Generate an error for a `remove` target that does not exist.
///
/// Suggests the closest managed path when one is within a small edit distance.
pub fn repository_not_found(path: &Path, known_paths: &[String]) -> anyhow::Error {
    let wanted = path.to_string_lossy();
    let candidates: Vec<&str> = known_paths.iter().map(String::as_str).collect();
    let did_you_mean = find_similar(&wanted, &candidates)
        .map(|s| format!("\nhint: Did you mean '{s}'?"))
        .unwrap_or_default();

    anyhow::anyhow!(
        "repository does not exist: {wanted}{did_you_mean}\n\n\
         hint: Paths are relative to the root shown by 'ghm root'\n\
         hint: Run 'ghm list' to see managed repositories"
    )
}

/// Generate an error for a `remove` path that would leave the root.
pub fn outside_root(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "path is not inside the root: {path}\n\n\
         hint: Pass the path relative to the root, as printed by 'ghm list'",
        path = path.display()
    )
}

/// Generate an error for a directory that is not a git repository.
pub fn not_a_repository(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "not a git repository: {path}\n\n\
         hint: Only directories containing .git can be removed",
        path = path.display()
    )
}

/// Generate an error for an identifier that could not be parsed.
pub fn malformed_identifier(error: &Error) -> anyhow::Error {
    anyhow::anyhow!(
        "failed to parse repository URL: {error}\n\n\
         hint: Use https://host/owner/name, host/owner/name or git@host:owner/name.git"
    )
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Single-row variant: `previous[j]` is the distance from a[..i] to b[..j]
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, a_char) in a_chars.iter().enumerate() {
        let mut current = vec![i + 1; b_chars.len() + 1];
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        previous = current;
    }

    previous[b_chars.len()]
}
