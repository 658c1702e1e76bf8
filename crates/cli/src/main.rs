// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `flinkup` - zero-downtime updates for Flink streaming jobs

mod commands;
mod env;
mod exit_error;

use clap::{Parser, Subcommand};
use exit_error::ExitError;

#[derive(Parser)]
#[command(name = "flinkup", version, about = "Zero-downtime updates for Flink streaming jobs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Update a running job, preserving its state via a savepoint
    Update(commands::update::UpdateArgs),
    /// Submit a job without the update workflow
    Deploy(commands::deploy::DeployArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Update(args) => commands::update::run(args).await,
        Command::Deploy(args) => commands::deploy::run(args).await,
    };

    if let Err(e) = result {
        match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                eprintln!("{}", exit);
                std::process::exit(exit.code);
            }
            None => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}
