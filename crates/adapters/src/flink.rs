// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job control driven through the `flink` CLI binary.

use crate::subprocess::{run_with_timeout, FLINK_COMMAND_TIMEOUT};
use async_trait::async_trait;
use flinkup_core::InstanceId;
use std::path::PathBuf;
use std::process::Output;
use thiserror::Error;

/// Errors from driving the flink binary.
#[derive(Debug, Error)]
pub enum FlinkError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` failed (exit {code}): {stderr}")]
    Failed {
        command: String,
        code: i32,
        stderr: String,
    },
}

/// Job-control capability: query, savepoint, and cancel running instances.
#[async_trait]
pub trait JobControl: Send + Sync {
    /// Instance ids currently running under `job_name`.
    async fn running_instances(&self, job_name: &str) -> Result<Vec<InstanceId>, FlinkError>;

    /// Trigger a savepoint on a running instance, returning the raw textual
    /// output of the trigger operation.
    ///
    /// Not idempotent: each invocation may produce a distinct savepoint.
    async fn trigger_savepoint(&self, instance: &InstanceId) -> Result<String, FlinkError>;

    /// Request cancellation of a running instance.
    async fn cancel(&self, instance: &InstanceId) -> Result<(), FlinkError>;
}

/// Drives a local `flink` CLI binary.
pub struct FlinkCli {
    bin: PathBuf,
}

impl FlinkCli {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }

    async fn run(&self, args: &[&str]) -> Result<Output, FlinkError> {
        let command = format!("flink {}", args.join(" "));
        tracing::debug!(command = %command, "running flink command");

        let mut cmd = tokio::process::Command::new(&self.bin);
        cmd.args(args);
        let output = run_with_timeout(cmd, FLINK_COMMAND_TIMEOUT, &command)
            .await
            .map_err(|source| FlinkError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(FlinkError::Failed {
                command,
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }
}

#[async_trait]
impl JobControl for FlinkCli {
    async fn running_instances(&self, job_name: &str) -> Result<Vec<InstanceId>, FlinkError> {
        let output = self.run(&["list", "-r"]).await?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_running_instances(&stdout, job_name))
    }

    async fn trigger_savepoint(&self, instance: &InstanceId) -> Result<String, FlinkError> {
        let output = self.run(&["savepoint", instance.as_str()]).await?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn cancel(&self, instance: &InstanceId) -> Result<(), FlinkError> {
        self.run(&["cancel", instance.as_str()]).await?;
        Ok(())
    }
}

/// Parse `flink list -r` output into the instance ids running under `name`.
///
/// Running jobs are printed one per line as
/// `<date> : <instance-id> : <name> (RUNNING)`; anything else is ignored.
/// The name match is exact, not a substring match.
pub(crate) fn parse_running_instances(stdout: &str, name: &str) -> Vec<InstanceId> {
    let mut ids = Vec::new();
    for line in stdout.lines() {
        let Some(rest) = line.trim().strip_suffix("(RUNNING)") else {
            continue;
        };
        let mut fields = rest.splitn(3, " : ");
        let (Some(_date), Some(id), Some(job)) = (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };
        if job.trim() == name {
            ids.push(InstanceId::new(id.trim()));
        }
    }
    ids
}

#[cfg(test)]
#[path = "flink_tests.rs"]
mod tests;
