// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Savepoint creation for a running instance.

use crate::update::UpdateError;
use flinkup_adapters::{Filesystem, JobControl};
use flinkup_core::{extract_savepoint_path, InstanceId};
use std::io;
use std::path::PathBuf;

/// Trigger a savepoint on `instance` and return its on-disk path.
///
/// The raw trigger output is parsed for the savepoint path, which is then
/// verified to exist in savepoint storage before being returned. Not
/// idempotent: re-invoking against the same instance may produce a distinct
/// savepoint each time, so callers invoke this at most once per update
/// cycle per instance.
pub async fn create_savepoint(
    jobctl: &impl JobControl,
    fs: &impl Filesystem,
    instance: &InstanceId,
) -> Result<PathBuf, UpdateError> {
    let output = jobctl.trigger_savepoint(instance).await?;
    let path = PathBuf::from(extract_savepoint_path(&output)?);

    if !fs.exists(&path).await? {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("savepoint {} does not exist", path.display()),
        )
        .into());
    }
    Ok(path)
}

#[cfg(test)]
#[path = "creator_tests.rs"]
mod tests;
