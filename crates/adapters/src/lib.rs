// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! flinkup-adapters: External collaborators for the update workflow
//!
//! Each collaborator sits behind a constructor-injected trait so the
//! workflow stays testable with substitutable fakes: the filesystem hosting
//! savepoints, the flink job-control binary, and job submission.

pub mod deploy;
pub mod flink;
pub mod fs;
pub mod subprocess;

pub use deploy::{DeployError, Deployer, FlinkCliDeployer};
pub use flink::{FlinkCli, FlinkError, JobControl};
pub use fs::{Filesystem, FsEntry, LocalFilesystem};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeDeployer, FakeFilesystem, FakeJobControl, JobControlCall};
