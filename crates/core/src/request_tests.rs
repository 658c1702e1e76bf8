// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn full_request() -> UpdateRequest {
    UpdateRequest::new("orders-job")
        .run_args("-p 4")
        .local_artifact("/artifacts/orders.jar")
        .remote_artifact("https://repo.invalid/orders.jar")
        .api_token("secret")
        .jar_args("--env prod")
        .savepoint_directory("/savepoints/orders")
        .allow_non_restorable_state(true)
}

#[test]
fn update_request_defaults_are_empty() {
    let req = UpdateRequest::new("orders-job");
    assert_eq!(req.job_name, "orders-job");
    assert!(req.run_args.is_empty());
    assert!(req.savepoint_directory.is_empty());
    assert!(!req.allow_non_restorable_state);
}

#[test]
fn deployment_carries_update_parameters() {
    let req = full_request();
    let deployment = DeploymentRequest::from_update(&req);

    assert_eq!(deployment.run_args, "-p 4");
    assert_eq!(deployment.local_artifact, "/artifacts/orders.jar");
    assert_eq!(deployment.remote_artifact, "https://repo.invalid/orders.jar");
    assert_eq!(deployment.api_token, "secret");
    assert_eq!(deployment.jar_args, "--env prod");
    assert!(deployment.allow_non_restorable_state);
}

#[test]
fn deployment_starts_without_savepoint() {
    let deployment = DeploymentRequest::from_update(&full_request());
    assert!(deployment.savepoint_path.is_none());
}

#[test]
fn with_savepoint_seeds_the_deployment() {
    let deployment =
        DeploymentRequest::from_update(&full_request()).with_savepoint("/savepoints/orders/sp-3");
    assert_eq!(
        deployment.savepoint_path.as_deref(),
        Some(std::path::Path::new("/savepoints/orders/sp-3"))
    );
}
