// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identity: user-facing names and runtime instance handles.

crate::define_id! {
    /// User-facing name of a streaming job.
    ///
    /// A name may map to zero, one, or several running instances at any
    /// moment; more than one is an inconsistent state the updater refuses
    /// to resolve on its own.
    pub struct JobName;
}

crate::define_id! {
    /// Runtime handle of one executing instance of a named job, as reported
    /// by the job manager.
    pub struct InstanceId;
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
