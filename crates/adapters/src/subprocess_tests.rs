// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn captures_stdout_and_status() {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg("echo hello");

    let output = run_with_timeout(cmd, Duration::from_secs(5), "echo").await.unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hello\n");
}

#[tokio::test]
async fn nonzero_exit_is_not_an_error() {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg("exit 3");

    let output = run_with_timeout(cmd, Duration::from_secs(5), "exit").await.unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[tokio::test]
async fn kills_the_command_on_timeout() {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg("sleep 5");

    let err = run_with_timeout(cmd, Duration::from_millis(50), "sleeper")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::TimedOut);
    assert!(err.to_string().contains("sleeper"));
}
