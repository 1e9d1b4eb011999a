//! Instance numbering for parallel clones of one repository.
//!
//! Instance `0` is the canonical clone at `host/owner/name`. Numbered clones
//! sit beside it as `name.1`, `name.2`, ... and are discovered by probing the
//! filesystem, so nothing beyond the directory tree itself needs to be stored.
//!
//! The probe is a point-in-time check with no locking: two processes
//! allocating concurrently can both see the same next number.

use std::path::{Path, PathBuf};

use log::{debug, warn};

/// Highest suffix the allocator looks for.
pub const MAX_PROBED_INSTANCE: u32 = 100;

/// Find the next free auto-assigned instance number for `host/owner/name`.
///
/// Returns one more than the highest existing `name.N` in `1..=100`, or `1`
/// when there is none. The unsuffixed `name` directory does not count: it is
/// the default slot, and auto-assignment always draws from `1` upwards.
pub fn find_next_instance(root: &Path, host: &str, owner: &str, name: &str) -> u32 {
    let base = root.join(host).join(owner).join(name);

    if base.exists() {
        debug!("default instance present at {}", base.display());
    }

    let highest = (1..=MAX_PROBED_INSTANCE)
        .filter(|&instance| instance_path(&base, instance).exists())
        .max()
        .unwrap_or(0);

    if highest == MAX_PROBED_INSTANCE {
        warn!(
            "instance {} of {} exists; numbers above {} are not probed",
            MAX_PROBED_INSTANCE,
            base.display(),
            MAX_PROBED_INSTANCE
        );
    }

    debug!("next instance for {} is {}", base.display(), highest + 1);
    highest + 1
}

fn instance_path(base: &Path, instance: u32) -> PathBuf {
    let mut path = base.as_os_str().to_owned();
    path.push(format!(".{instance}"));
    PathBuf::from(path)
}

/// Read the instance number back from a clone's directory name.
///
/// `repo.3` gives `3`; `repo`, `repo.old` and `some.dotted.name` give `0`.
pub fn instance_from_dir_name(path: &Path) -> u32 {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .and_then(|(_, suffix)| suffix.parse().ok())
        .unwrap_or(0)
}
