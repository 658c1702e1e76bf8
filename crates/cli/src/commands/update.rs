// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `flinkup update` - the zero-downtime update workflow

use std::io::Write;

use anyhow::Result;
use clap::Args;

use flinkup_adapters::{FlinkCli, FlinkCliDeployer, LocalFilesystem};
use flinkup_core::UpdateRequest;
use flinkup_engine::{UpdateError, Updater};

use crate::env;
use crate::exit_error::ExitError;

#[derive(Args)]
pub struct UpdateArgs {
    /// Name of the job to update
    #[arg(long, default_value = "")]
    pub job_name: String,

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

    /// Directory holding savepoints, the fallback seed when no instance is running
    #[arg(long, default_value = "")]
    pub savepoint_dir: String,

    /// Permit the new deployment to skip state it cannot restore
    #[arg(long)]
    pub allow_non_restorable_state: bool,
}

/// Run the update workflow against a local flink installation.
///
/// Exit codes: 2 for missing arguments, 3 when multiple instances of the
/// job are running, 1 for any other failure.
pub async fn run(args: UpdateArgs) -> Result<()> {
    let bin = env::flink_bin();
    let updater = Updater::new(
        LocalFilesystem,
        FlinkCli::new(&bin),
        FlinkCliDeployer::new(&bin),
    );

    let request = UpdateRequest::new(args.job_name)
        .run_args(args.run_args)
        .local_artifact(args.local_filename)
        .remote_artifact(args.remote_filename)
        .api_token(args.api_token)
        .jar_args(args.jar_args)
        .savepoint_directory(args.savepoint_dir)
        .allow_non_restorable_state(args.allow_non_restorable_state);

    let output = updater
        .execute(request)
        .await
        .map_err(|e| ExitError::new(exit_code_for(&e), format!("update failed: {}", e)))?;

    std::io::stdout().write_all(&output)?;
    Ok(())
}

fn exit_code_for(e: &UpdateError) -> i32 {
    match e {
        UpdateError::MissingJobName | UpdateError::MissingSavepointDirectory => 2,
        UpdateError::MultipleInstances { .. } => 3,
        _ => 1,
    }
}
