// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use flinkup_adapters::FakeFilesystem;

#[tokio::test]
async fn picks_the_newest_entry() {
    let fs = FakeFilesystem::default()
        .with_entry("/sp", "/sp/sp-1", 100)
        .with_entry("/sp", "/sp/sp-3", 300)
        .with_entry("/sp", "/sp/sp-2", 200);

    let latest = find_latest(&fs, "/sp").await.unwrap();
    assert_eq!(latest, Some(PathBuf::from("/sp/sp-3")));
}

#[tokio::test]
async fn empty_directory_is_not_an_error() {
    let fs = FakeFilesystem::default().with_dir("/sp");
    assert_eq!(find_latest(&fs, "/sp").await.unwrap(), None);
}

#[tokio::test]
async fn trailing_separator_is_normalized() {
    let fs = FakeFilesystem::default().with_entry("/sp", "/sp/sp-1", 100);
    let latest = find_latest(&fs, "/sp/").await.unwrap();
    assert_eq!(latest, Some(PathBuf::from("/sp/sp-1")));
}

#[tokio::test]
async fn equal_timestamps_resolve_to_the_last_observed() {
    let fs = FakeFilesystem::default()
        .with_entry("/sp", "/sp/older", 100)
        .with_entry("/sp", "/sp/first-max", 200)
        .with_entry("/sp", "/sp/second-max", 200);

    let latest = find_latest(&fs, "/sp").await.unwrap();
    assert_eq!(latest, Some(PathBuf::from("/sp/second-max")));
}

#[tokio::test]
async fn listing_failure_propagates() {
    let fs = FakeFilesystem::default();
    let err = find_latest(&fs, "/missing").await.unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
