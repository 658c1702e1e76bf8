// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Latest-savepoint discovery in a savepoint directory.

use flinkup_adapters::Filesystem;
use std::io;
use std::path::{Path, PathBuf};

/// Find the most recently modified entry of `dir`.
///
/// This is the fallback seed when no instance of a job is running: the
/// directory's newest entry is taken to be the last savepoint written.
/// Returns `Ok(None)` for an empty directory; the caller decides whether a
/// fresh start is acceptable. Ties on the modification timestamp resolve
/// to the last entry observed among the equal maxima.
pub async fn find_latest(fs: &impl Filesystem, dir: &str) -> io::Result<Option<PathBuf>> {
    let dir = dir.strip_suffix('/').unwrap_or(dir);
    let entries = fs.list_dir(Path::new(dir)).await?;

    let mut newest: Option<(i64, PathBuf)> = None;
    for entry in entries {
        match newest {
            Some((max_secs, _)) if entry.modified_secs < max_secs => {}
            _ => newest = Some((entry.modified_secs, entry.path)),
        }
    }
    Ok(newest.map(|(_, path)| path))
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
