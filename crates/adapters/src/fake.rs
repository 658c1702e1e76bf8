// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording fakes for the adapter traits.
//!
//! Compiled for tests or behind the `test-support` feature so other crates
//! can drive the update workflow without a flink binary or real savepoint
//! storage. Fakes are configured up front with builder-style setters and
//! record every call behind a shared lock; clones share the call log.

use crate::deploy::{DeployError, Deployer};
use crate::flink::{FlinkError, JobControl};
use crate::fs::{Filesystem, FsEntry};
use async_trait::async_trait;
use flinkup_core::{DeploymentRequest, InstanceId};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Calls observed by [`FakeJobControl`], in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobControlCall {
    List { job_name: String },
    Savepoint { instance: InstanceId },
    Cancel { instance: InstanceId },
}

fn scripted_failure(command: &str, stderr: &str) -> FlinkError {
    FlinkError::Failed {
        command: command.to_string(),
        code: 1,
        stderr: stderr.to_string(),
    }
}

/// Scripted job control: returns the configured instance list and savepoint
/// output, records every call.
#[derive(Clone, Default)]
pub struct FakeJobControl {
    running: Vec<InstanceId>,
    savepoint_output: String,
    list_error: Option<String>,
    savepoint_error: Option<String>,
    cancel_error: Option<String>,
    calls: Arc<Mutex<Vec<JobControlCall>>>,
}

impl FakeJobControl {
    /// Instance ids reported as running for any queried job name.
    pub fn with_running(mut self, instances: impl IntoIterator<Item = InstanceId>) -> Self {
        self.running = instances.into_iter().collect();
        self
    }

    /// Raw output returned from savepoint triggering.
    pub fn with_savepoint_output(mut self, output: impl Into<String>) -> Self {
        self.savepoint_output = output.into();
        self
    }

    /// Make the running-instances query fail.
    pub fn with_list_error(mut self, stderr: impl Into<String>) -> Self {
        self.list_error = Some(stderr.into());
        self
    }

    /// Make savepoint triggering fail.
    pub fn with_savepoint_error(mut self, stderr: impl Into<String>) -> Self {
        self.savepoint_error = Some(stderr.into());
        self
    }

    /// Make cancellation fail.
    pub fn with_cancel_error(mut self, stderr: impl Into<String>) -> Self {
        self.cancel_error = Some(stderr.into());
        self
    }

    /// Calls observed so far, in order.
    pub fn calls(&self) -> Vec<JobControlCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl JobControl for FakeJobControl {
    async fn running_instances(&self, job_name: &str) -> Result<Vec<InstanceId>, FlinkError> {
        self.calls.lock().push(JobControlCall::List {
            job_name: job_name.to_string(),
        });
        match self.list_error {
            Some(ref stderr) => Err(scripted_failure("flink list -r", stderr)),
            None => Ok(self.running.clone()),
        }
    }

    async fn trigger_savepoint(&self, instance: &InstanceId) -> Result<String, FlinkError> {
        self.calls.lock().push(JobControlCall::Savepoint {
            instance: instance.clone(),
        });
        match self.savepoint_error {
            Some(ref stderr) => Err(scripted_failure("flink savepoint", stderr)),
            None => Ok(self.savepoint_output.clone()),
        }
    }

    async fn cancel(&self, instance: &InstanceId) -> Result<(), FlinkError> {
        self.calls.lock().push(JobControlCall::Cancel {
            instance: instance.clone(),
        });
        match self.cancel_error {
            Some(ref stderr) => Err(scripted_failure("flink cancel", stderr)),
            None => Ok(()),
        }
    }
}

/// In-memory filesystem: directories with scripted entries plus a set of
/// existing paths.
#[derive(Clone, Default)]
pub struct FakeFilesystem {
    dirs: HashMap<PathBuf, Vec<FsEntry>>,
    existing: HashSet<PathBuf>,
    exists_errors: HashSet<PathBuf>,
}

impl FakeFilesystem {
    /// Register an empty directory.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.entry(dir.into()).or_default();
        self
    }

    /// Register an entry of `dir` with the given modification time.
    /// The entry's path is also marked as existing.
    pub fn with_entry(
        mut self,
        dir: impl Into<PathBuf>,
        path: impl Into<PathBuf>,
        modified_secs: i64,
    ) -> Self {
        let path = path.into();
        self.existing.insert(path.clone());
        self.dirs.entry(dir.into()).or_default().push(FsEntry {
            path,
            modified_secs,
        });
        self
    }

    /// Mark a path as existing without listing it anywhere.
    pub fn with_existing(mut self, path: impl Into<PathBuf>) -> Self {
        self.existing.insert(path.into());
        self
    }

    /// Make the existence check for `path` fail.
    pub fn with_exists_error(mut self, path: impl Into<PathBuf>) -> Self {
        self.exists_errors.insert(path.into());
        self
    }
}

#[async_trait]
impl Filesystem for FakeFilesystem {
    async fn list_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        self.dirs.get(dir).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such directory: {}", dir.display()))
        })
    }

    async fn exists(&self, path: &Path) -> io::Result<bool> {
        if self.exists_errors.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("stat failed: {}", path.display()),
            ));
        }
        Ok(self.existing.contains(path))
    }
}

/// Records deployment requests and returns scripted output.
#[derive(Clone, Default)]
pub struct FakeDeployer {
    output: Vec<u8>,
    error: Option<String>,
    requests: Arc<Mutex<Vec<DeploymentRequest>>>,
}

impl FakeDeployer {
    /// Raw output returned from a successful submission.
    pub fn with_output(mut self, output: impl Into<Vec<u8>>) -> Self {
        self.output = output.into();
        self
    }

    /// Make submission fail.
    pub fn with_error(mut self, stderr: impl Into<String>) -> Self {
        self.error = Some(stderr.into());
        self
    }

    /// Deployment requests observed so far, in order.
    pub fn requests(&self) -> Vec<DeploymentRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Deployer for FakeDeployer {
    async fn deploy(&self, req: &DeploymentRequest) -> Result<Vec<u8>, DeployError> {
        self.requests.lock().push(req.clone());
        match self.error {
            Some(ref stderr) => Err(DeployError::Failed {
                code: 1,
                stderr: stderr.clone(),
            }),
            None => Ok(self.output.clone()),
        }
    }
}
