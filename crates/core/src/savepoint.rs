// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Savepoint-path extraction from savepoint-trigger output.

use thiserror::Error;

/// Marker preceding the savepoint path in the job manager's
/// savepoint-trigger output. The path runs from the marker to the end of
/// the line.
pub const SAVEPOINT_MARKER: &str = "Savepoint completed. Path: file:";

/// Errors from savepoint-path extraction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("could not extract savepoint path from flink's output")]
    NotFound,
    #[error("multiple matches for savepoint found")]
    Ambiguous,
}

/// Extract the savepoint path from raw savepoint-trigger output.
///
/// Exactly one complete line (terminated by a line break) containing
/// `Savepoint completed. Path: file:<path>` must be present. Zero matches
/// or more than one are hard failures: silently picking one of several
/// paths would risk restoring from the wrong state.
pub fn extract_savepoint_path(output: &str) -> Result<String, ExtractError> {
    let mut found: Option<&str> = None;
    for line in output.split_inclusive('\n') {
        let Some(line) = line.strip_suffix('\n') else {
            // Unterminated trailing line: not a complete marker line.
            continue;
        };
        if let Some(pos) = line.find(SAVEPOINT_MARKER) {
            if found.is_some() {
                return Err(ExtractError::Ambiguous);
            }
            found = Some(&line[pos + SAVEPOINT_MARKER.len()..]);
        }
    }
    found.map(str::to_owned).ok_or(ExtractError::NotFound)
}

#[cfg(test)]
#[path = "savepoint_tests.rs"]
mod tests;
