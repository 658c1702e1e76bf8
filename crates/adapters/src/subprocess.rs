// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution with timeout guards.

use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

/// Timeout for flink CLI invocations (list, savepoint, cancel, run).
/// Savepoint triggering can take minutes for jobs with large state.
pub const FLINK_COMMAND_TIMEOUT: Duration = Duration::from_secs(600);

/// Timeout for fetching a remote artifact.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(300);

/// Run a command to completion, killing it if it exceeds `timeout`.
///
/// `label` names the operation in the timeout error message.
pub async fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
    label: &str,
) -> std::io::Result<Output> {
    cmd.kill_on_drop(true);
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(result) => result,
        Err(_) => Err(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            format!("{} timed out after {}s", label, timeout.as_secs()),
        )),
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
