// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument validation specs
//!
//! Missing or empty required inputs stop the run before any cluster
//! configuration is resolved.

use crate::prelude::*;

#[test]
fn no_args_is_a_usage_error() {
    podex().fails_with(2).stderr_has("Usage:").stdout_empty();
}

#[test]
fn missing_container_is_rejected() {
    podex()
        .args(&["-l", "app=web", "hostname"])
        .fails_with(2)
        .stderr_has("--container");
}

#[test]
fn missing_selector_is_rejected() {
    podex()
        .args(&["-c", "app", "hostname"])
        .fails_with(2)
        .stderr_has("--selector");
}

#[test]
fn missing_command_is_rejected() {
    podex()
        .args(&["-c", "app", "-l", "app=web"])
        .fails_with(2)
        .stderr_has("<COMMAND>");
}

#[test]
fn empty_container_is_rejected_before_config() {
    // No kubeconfig or cluster env exists, so reaching config would exit 1
    podex()
        .args(&["-c", "", "-l", "app=web", "hostname"])
        .fails_with(2)
        .stderr_has("container name must not be empty")
        .stdout_empty();
}

#[test]
fn empty_selector_is_rejected_before_config() {
    podex()
        .args(&["-c", "app", "-l", "", "hostname"])
        .fails_with(2)
        .stderr_has("label selector must not be empty");
}
