// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job submission through `flink run`.

use crate::subprocess::{run_with_timeout, FETCH_TIMEOUT, FLINK_COMMAND_TIMEOUT};
use async_trait::async_trait;
use flinkup_core::DeploymentRequest;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from job submission.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("failed to run `flink run`: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("`flink run` failed (exit {code}): {stderr}")]
    Failed { code: i32, stderr: String },
}

/// Deploy capability: submit one deployment, returning its raw output.
#[async_trait]
pub trait Deployer: Send + Sync {
    async fn deploy(&self, req: &DeploymentRequest) -> Result<Vec<u8>, DeployError>;
}

/// Submits jobs with `flink run`, fetching the artifact first when a remote
/// location is configured.
pub struct FlinkCliDeployer {
    bin: PathBuf,
}

impl FlinkCliDeployer {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }

    /// Fetch the remote artifact to the local path, with a bearer token
    /// when one is configured.
    async fn fetch_artifact(&self, req: &DeploymentRequest) -> Result<(), DeployError> {
        tracing::info!(url = %req.remote_artifact, to = %req.local_artifact, "fetching artifact");

        let mut cmd = tokio::process::Command::new("curl");
        cmd.args(["-fsSL", "-o", &req.local_artifact]);
        if !req.api_token.is_empty() {
            cmd.arg("-H")
                .arg(format!("Authorization: Bearer {}", req.api_token));
        }
        cmd.arg(&req.remote_artifact);

        let fetch_failed = |reason: String| DeployError::Fetch {
            url: req.remote_artifact.clone(),
            reason,
        };
        let output = run_with_timeout(cmd, FETCH_TIMEOUT, "artifact fetch")
            .await
            .map_err(|e| fetch_failed(e.to_string()))?;
        if !output.status.success() {
            return Err(fetch_failed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Deployer for FlinkCliDeployer {
    async fn deploy(&self, req: &DeploymentRequest) -> Result<Vec<u8>, DeployError> {
        if !req.remote_artifact.is_empty() {
            self.fetch_artifact(req).await?;
        }

        tracing::info!(
            artifact = %req.local_artifact,
            savepoint = ?req.savepoint_path,
            "submitting job"
        );

        let mut cmd = tokio::process::Command::new(&self.bin);
        cmd.args(run_arguments(req));
        let output = run_with_timeout(cmd, FLINK_COMMAND_TIMEOUT, "flink run")
            .await
            .map_err(DeployError::Spawn)?;

        if !output.status.success() {
            return Err(DeployError::Failed {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output.stdout)
    }
}

/// Assemble the argument list for `flink run`.
///
/// Order matters to flink: run-command options first, then the artifact,
/// then the arguments handed to the job itself.
pub(crate) fn run_arguments(req: &DeploymentRequest) -> Vec<String> {
    let mut args = vec!["run".to_string()];
    args.extend(req.run_args.split_whitespace().map(str::to_string));
    if let Some(ref savepoint) = req.savepoint_path {
        args.push("-s".to_string());
        args.push(savepoint.display().to_string());
    }
    if req.allow_non_restorable_state {
        args.push("-n".to_string());
    }
    args.push(req.local_artifact.clone());
    args.extend(req.jar_args.split_whitespace().map(str::to_string));
    args
}

#[cfg(test)]
#[path = "deploy_tests.rs"]
mod tests;
