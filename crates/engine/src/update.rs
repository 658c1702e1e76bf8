// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The update workflow: query, branch on instance count, deploy.

use crate::{creator, locator};
use flinkup_adapters::{DeployError, Deployer, Filesystem, FlinkError, JobControl};
use flinkup_core::{DeploymentRequest, ExtractError, UpdateRequest};
use thiserror::Error;

/// Errors from one update invocation.
///
/// Every failure aborts the update immediately; there are no retries. The
/// caller must treat any error as "update did not complete" with prior
/// state untouched.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("unspecified argument 'job_name'")]
    MissingJobName,
    #[error("cannot retrieve the latest savepoint without specifying the savepoint directory")]
    MissingSavepointDirectory,
    #[error("{job_name} has {count} instances running")]
    MultipleInstances { job_name: String, count: usize },
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    JobControl(#[from] FlinkError),
    #[error(transparent)]
    Deploy(#[from] DeployError),
}

/// Executes the update workflow against injected collaborators.
///
/// One `execute` call runs start-to-finish with no internal parallelism;
/// cross-job concurrency policy belongs to the caller.
pub struct Updater<F, J, D> {
    fs: F,
    jobctl: J,
    deployer: D,
}

impl<F, J, D> Updater<F, J, D>
where
    F: Filesystem,
    J: JobControl,
    D: Deployer,
{
    pub fn new(fs: F, jobctl: J, deployer: D) -> Self {
        Self {
            fs,
            jobctl,
            deployer,
        }
    }

    /// Run one zero-downtime update: savepoint any running instance, stop
    /// it, and redeploy seeded from the preserved state.
    ///
    /// With no instance running the newest entry of the savepoint directory
    /// seeds the deployment instead (an empty directory means fresh start).
    /// More than one running instance is an inconsistent state and fails
    /// without guessing which instance is authoritative.
    pub async fn execute(&self, req: UpdateRequest) -> Result<Vec<u8>, UpdateError> {
        if req.job_name.is_empty() {
            return Err(UpdateError::MissingJobName);
        }

        tracing::info!(job = %req.job_name, "starting job update");

        let instances = match self.jobctl.running_instances(req.job_name.as_str()).await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::error!(job = %req.job_name, error = %e, "retrieving the running instances failed");
                return Err(e.into());
            }
        };

        let mut deployment = DeploymentRequest::from_update(&req);
        match instances.as_slice() {
            [] => {
                tracing::info!(job = %req.job_name, "no instance running, using last available savepoint");

                if req.savepoint_directory.is_empty() {
                    return Err(UpdateError::MissingSavepointDirectory);
                }
                match locator::find_latest(&self.fs, &req.savepoint_directory).await {
                    Ok(Some(latest)) => deployment = deployment.with_savepoint(latest),
                    // Empty directory: deploy from a fresh start.
                    Ok(None) => {}
                    Err(e) => {
                        tracing::error!(dir = %req.savepoint_directory, error = %e, "retrieving the latest savepoint failed");
                        return Err(e.into());
                    }
                }
            }
            [instance] => {
                tracing::info!(job = %req.job_name, instance = %instance, "found exactly one running instance");

                let savepoint =
                    creator::create_savepoint(&self.jobctl, &self.fs, instance).await?;
                deployment = deployment.with_savepoint(savepoint);

                // Best-effort: the new deployment proceeds even if the old
                // instance could not be cancelled.
                if let Err(e) = self.jobctl.cancel(instance).await {
                    tracing::warn!(instance = %instance, error = %e, "cancel request failed");
                }
            }
            _ => {
                return Err(UpdateError::MultipleInstances {
                    job_name: req.job_name.to_string(),
                    count: instances.len(),
                });
            }
        }

        Ok(self.deployer.deploy(&deployment).await?)
    }
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
