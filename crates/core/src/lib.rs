// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! flinkup-core: Domain types for the flinkup job updater

pub mod id;
pub mod macros;

pub mod job;
pub mod request;
pub mod savepoint;

pub use job::{InstanceId, JobName};
pub use request::{DeploymentRequest, UpdateRequest};
pub use savepoint::{extract_savepoint_path, ExtractError, SAVEPOINT_MARKER};
