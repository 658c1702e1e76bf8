// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn list_dir_returns_immediate_entries() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("sp-1"), b"state").unwrap();
    std::fs::write(temp.path().join("sp-2"), b"state").unwrap();

    let mut entries = LocalFilesystem.list_dir(temp.path()).await.unwrap();
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].path, temp.path().join("sp-1"));
    assert_eq!(entries[1].path, temp.path().join("sp-2"));
    for entry in &entries {
        assert!(entry.modified_secs > 0);
    }
}

#[tokio::test]
async fn list_dir_missing_directory_errors() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("nope");

    let err = LocalFilesystem.list_dir(&missing).await.unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[tokio::test]
async fn exists_reflects_the_filesystem() {
    let temp = tempfile::tempdir().unwrap();
    let present = temp.path().join("sp-1");
    std::fs::write(&present, b"state").unwrap();

    assert!(LocalFilesystem.exists(&present).await.unwrap());
    assert!(!LocalFilesystem.exists(&temp.path().join("sp-2")).await.unwrap());
}
