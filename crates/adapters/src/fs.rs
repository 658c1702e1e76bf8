// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem access to savepoint storage.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// One directory entry with its modification time in Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub modified_secs: i64,
}

/// Filesystem capability used by the savepoint workflow.
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// List the immediate entries of `dir` (non-recursive).
    async fn list_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>>;

    /// Whether `path` currently exists.
    async fn exists(&self, path: &Path) -> io::Result<bool>;
}

/// Local filesystem adapter backed by `tokio::fs`.
pub struct LocalFilesystem;

#[async_trait]
impl Filesystem for LocalFilesystem {
    async fn list_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut entries = Vec::new();
        let mut read_dir = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = read_dir.next_entry().await? {
            let modified = entry.metadata().await?.modified()?;
            let modified_secs = match modified.duration_since(UNIX_EPOCH) {
                Ok(elapsed) => elapsed.as_secs() as i64,
                // Pre-epoch mtime: sorts before any sane savepoint.
                Err(e) => -(e.duration().as_secs() as i64),
            };
            entries.push(FsEntry {
                path: entry.path(),
                modified_secs,
            });
        }
        Ok(entries)
    }

    async fn exists(&self, path: &Path) -> io::Result<bool> {
        tokio::fs::try_exists(path).await
    }
}

#[cfg(test)]
#[path = "fs_tests.rs"]
mod tests;
