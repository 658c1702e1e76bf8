// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn extracts_the_single_marker_line() {
    let output = "Triggering savepoint for job jid-7.\n\
                  Waiting for response...\n\
                  Savepoint completed. Path: file:/savepoints/orders/sp-3\n\
                  You can resume your program from this savepoint.\n";
    assert_eq!(
        extract_savepoint_path(output),
        Ok("/savepoints/orders/sp-3".to_string())
    );
}

#[test]
fn extracts_with_surrounding_noise() {
    let output = "...\nSavepoint completed. Path: file:/sp/orders-1\n...";
    assert_eq!(extract_savepoint_path(output), Ok("/sp/orders-1".to_string()));
}

#[parameterized(
    empty = { "" },
    no_marker = { "Triggering savepoint for job jid-7.\nDone.\n" },
    unterminated = { "Savepoint completed. Path: file:/sp/orders-1" },
    wrong_scheme = { "Savepoint completed. Path: hdfs://sp/orders-1\n" },
)]
fn fails_without_a_complete_marker_line(output: &str) {
    assert_eq!(extract_savepoint_path(output), Err(ExtractError::NotFound));
}

#[test]
fn refuses_multiple_matches() {
    let output = "Savepoint completed. Path: file:/sp/orders-1\n\
                  Savepoint completed. Path: file:/sp/orders-2\n";
    assert_eq!(extract_savepoint_path(output), Err(ExtractError::Ambiguous));
}

#[test]
fn captures_an_empty_path_literally() {
    // A marker line with nothing after it still counts as the one match;
    // the caller's existence check rejects it downstream.
    assert_eq!(
        extract_savepoint_path("Savepoint completed. Path: file:\n"),
        Ok(String::new())
    );
}
