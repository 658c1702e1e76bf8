// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace-level CLI specs.
//!
//! Drive the compiled `flinkup` binary end to end. Anything that needs a
//! live flink installation stays in the engine's fake-driven tests; these
//! specs cover argument handling and exit codes.

use assert_cmd::Command;

fn flinkup() -> Command {
    match Command::cargo_bin("flinkup") {
        Ok(cmd) => cmd,
        Err(e) => panic!("flinkup binary not built: {}", e),
    }
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn help_lists_the_commands() {
    let assert = flinkup().arg("--help").assert().success();
    let stdout = stdout_of(&assert);
    assert!(stdout.contains("update"));
    assert!(stdout.contains("deploy"));
}

#[test]
fn update_requires_a_job_name() {
    let assert = flinkup().arg("update").assert().failure().code(2);
    assert!(stderr_of(&assert).contains("unspecified argument 'job_name'"));
}

#[test]
fn update_without_a_savepoint_directory_mentions_it() {
    // No instance can be running: the flink stand-in reports an empty list.
    let assert = flinkup()
        .env("FLINKUP_FLINK_BIN", "true")
        .args(["update", "--job-name", "orders-job"])
        .assert()
        .failure()
        .code(2);
    assert!(stderr_of(&assert).contains("savepoint directory"));
}

#[test]
fn deploy_requires_a_local_filename() {
    let assert = flinkup().arg("deploy").assert().failure().code(2);
    assert!(stderr_of(&assert).contains("local-filename"));
}

#[test]
fn unknown_flags_are_rejected() {
    flinkup().args(["update", "--frobnicate"]).assert().failure();
}
