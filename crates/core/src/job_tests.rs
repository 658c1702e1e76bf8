// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn job_name_display() {
    let name = JobName::new("orders-job");
    assert_eq!(name.to_string(), "orders-job");
}

#[test]
fn job_name_equality() {
    let name1 = JobName::new("orders-job");
    let name2 = JobName::new("orders-job");
    let name3 = JobName::new("payments-job");

    assert_eq!(name1, name2);
    assert_ne!(name1, name3);
}

#[test]
fn job_name_from_str() {
    let name: JobName = "orders-job".into();
    assert_eq!(name.as_str(), "orders-job");
}

#[test]
fn job_name_is_empty() {
    assert!(JobName::new("").is_empty());
    assert!(!JobName::new("orders-job").is_empty());
}

#[test]
fn job_name_serde() {
    let name = JobName::new("orders-job");
    let json = serde_json::to_string(&name).unwrap();
    assert_eq!(json, "\"orders-job\"");

    let parsed: JobName = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, name);
}

#[test]
fn instance_id_compares_to_str() {
    let id = InstanceId::new("jid-7");
    assert_eq!(id, "jid-7");
    assert_ne!(id, "jid-8");
}
