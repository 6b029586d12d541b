// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_shows_usage_and_flags() {
    podex()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--container")
        .stdout_has("--selector")
        .stdout_has("--namespace")
        .stdout_has("--kubeconfig")
        .stdout_has("<COMMAND>");
}

#[test]
fn version_shows_version() {
    podex()
        .args(&["--version"])
        .passes()
        .stdout_has("podex 0.2");
}

#[test]
fn help_is_plain_without_color() {
    let out = podex().args(&["--help"]).passes();
    assert!(
        !out.stdout.contains('\x1b'),
        "unexpected escape codes:\n{}",
        out.stdout
    );
}
