// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Update and deployment request value objects.

use crate::job::JobName;
use std::path::PathBuf;

/// Parameters for one job update invocation.
///
/// Built once per invocation from caller input and never mutated afterwards,
/// except to thread its fields into a [`DeploymentRequest`]. All entities
/// are request-scoped: nothing is cached across invocations.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    /// Name of the job to update.
    pub job_name: JobName,
    /// Extra arguments for the job manager's run command.
    pub run_args: String,
    /// Path of the job artifact on local disk.
    pub local_artifact: String,
    /// Remote artifact location, fetched before submission when set.
    pub remote_artifact: String,
    /// Bearer token used when fetching the remote artifact.
    pub api_token: String,
    /// Arguments passed to the job's own entry point.
    pub jar_args: String,
    /// Directory holding savepoints, the fallback seed when no instance
    /// of the job is running.
    pub savepoint_directory: String,
    /// Permit the new deployment to skip state it cannot restore.
    pub allow_non_restorable_state: bool,
}

impl UpdateRequest {
    pub fn new(job_name: impl Into<JobName>) -> Self {
        Self {
            job_name: job_name.into(),
            run_args: String::new(),
            local_artifact: String::new(),
            remote_artifact: String::new(),
            api_token: String::new(),
            jar_args: String::new(),
            savepoint_directory: String::new(),
            allow_non_restorable_state: false,
        }
    }

    crate::setters! {
        into {
            run_args: String,
            local_artifact: String,
            remote_artifact: String,
            api_token: String,
            jar_args: String,
            savepoint_directory: String,
        }
        set {
            allow_non_restorable_state: bool,
        }
    }
}

/// A fully-resolved deployment, handed to the deploy collaborator.
///
/// Owned by the update workflow for the duration of one invocation and not
/// retained after submission.
#[derive(Debug, Clone)]
pub struct DeploymentRequest {
    pub run_args: String,
    pub local_artifact: String,
    pub remote_artifact: String,
    pub api_token: String,
    pub jar_args: String,
    /// Savepoint seeding the new deployment. `None` means fresh start.
    pub savepoint_path: Option<PathBuf>,
    pub allow_non_restorable_state: bool,
}

impl DeploymentRequest {
    /// Carry the update parameters through, with no savepoint resolved yet.
    pub fn from_update(req: &UpdateRequest) -> Self {
        Self {
            run_args: req.run_args.clone(),
            local_artifact: req.local_artifact.clone(),
            remote_artifact: req.remote_artifact.clone(),
            api_token: req.api_token.clone(),
            jar_args: req.jar_args.clone(),
            savepoint_path: None,
            allow_non_restorable_state: req.allow_non_restorable_state,
        }
    }

    /// Seed the deployment from a savepoint path.
    pub fn with_savepoint(mut self, path: impl Into<PathBuf>) -> Self {
        self.savepoint_path = Some(path.into());
        self
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
