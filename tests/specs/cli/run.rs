// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal run paths: configuration and discovery failures produce no report.

use crate::prelude::*;

#[test]
fn unreadable_kubeconfig_without_cluster_env_is_fatal() {
    let out = podex()
        .args(&[
            "--kubeconfig",
            "/nonexistent/podex/kubeconfig",
            "-c",
            "app",
            "-l",
            "app=web",
            "hostname",
        ])
        .fails_with(1)
        .stderr_has("in-cluster config unavailable")
        .stdout_empty();
    assert!(out.stderr.starts_with("Error: "));
}

#[test]
fn unknown_context_is_fatal() {
    let kc = kubeconfig("https://127.0.0.1:1");
    let path = kc.path().to_str().unwrap();
    podex()
        .args(&[
            "--kubeconfig",
            path,
            "--context",
            "missing",
            "-c",
            "app",
            "-l",
            "a=b",
            "ls",
        ])
        .fails_with(1)
        .stdout_empty();
}

#[test]
fn unreachable_cluster_fails_discovery_without_report() {
    let kc = kubeconfig("https://127.0.0.1:1");
    let path = kc.path().to_str().unwrap();
    podex()
        .args(&[
            "--kubeconfig",
            path,
            "-c",
            "app",
            "-l",
            "app=web",
            "-n",
            "prod",
            "hostname",
        ])
        .fails_with(1)
        .stderr_has("Error: failed to list pods for app=web in prod")
        .stdout_empty();
}
