// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `flinkup deploy` - plain submission without the update workflow

use std::io::Write;

use anyhow::Result;
use clap::Args;

use flinkup_adapters::{Deployer, FlinkCliDeployer};
use flinkup_core::DeploymentRequest;

use crate::env;
use crate::exit_error::ExitError;

#[derive(Args)]
pub struct DeployArgs {
    /// Extra arguments for the flink run command
    #[arg(long, default_value = "")]
    pub run_args: String,

    /// Path of the job artifact on local disk
    #[arg(long, default_value = "")]
    pub local_filename: String,

    /// Remote artifact location, fetched before submission
    #[arg(long, default_value = "")]
    pub remote_filename: String,

    /// Bearer token for fetching the remote artifact
    #[arg(long, default_value = "")]
    pub api_token: String,

    /// Arguments passed to the job itself
    #[arg(long, default_value = "")]
    pub jar_args: String,

    /// Savepoint to resume from (omit for a fresh start)
    #[arg(long)]
    pub savepoint_path: Option<String>,

    /// Permit the new deployment to skip state it cannot restore
    #[arg(long)]
    pub allow_non_restorable_state: bool,
}

/// Submit one deployment directly.
///
/// Exit codes: 2 for missing arguments, 1 for a failed submission.
pub async fn run(args: DeployArgs) -> Result<()> {
    if args.local_filename.is_empty() {
        return Err(ExitError::usage("unspecified argument 'local-filename'").into());
    }

    let mut request = DeploymentRequest {
        run_args: args.run_args,
        local_artifact: args.local_filename,
        remote_artifact: args.remote_filename,
        api_token: args.api_token,
        jar_args: args.jar_args,
        savepoint_path: None,
        allow_non_restorable_state: args.allow_non_restorable_state,
    };
    if let Some(savepoint) = args.savepoint_path {
        request = request.with_savepoint(savepoint);
    }

    let output = FlinkCliDeployer::new(env::flink_bin())
        .deploy(&request)
        .await
        .map_err(|e| ExitError::new(1, format!("deploy failed: {}", e)))?;

    std::io::stdout().write_all(&output)?;
    Ok(())
}
