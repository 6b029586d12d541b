// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers for driving the `podex` binary.

use std::io::Write;

use assert_cmd::Command;

pub use similar_asserts::assert_eq;

/// A `podex` invocation with a clean, cluster-free environment.
pub struct Run {
    cmd: Command,
}

pub fn podex() -> Run {
    let mut cmd = Command::cargo_bin("podex")
        .expect("podex binary should be built");
    cmd.env("NO_COLOR", "1")
        .env("PODEX_LOG", "off")
        .env_remove("COLOR")
        .env_remove("KUBECONFIG")
        .env_remove("KUBERNETES_SERVICE_HOST")
        .env_remove("KUBERNETES_SERVICE_PORT");
    Run { cmd }
}

impl Run {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Expect exit status 0.
    pub fn passes(mut self) -> Outcome {
        let out = self.cmd.output().expect("failed to spawn podex");
        let outcome = Outcome::from(out.clone());
        assert!(
            out.status.success(),
            "expected success, got {:?}\nstderr: {}",
            out.status.code(),
            outcome.stderr
        );
        outcome
    }

    /// Expect the given non-zero exit status.
    pub fn fails_with(mut self, code: i32) -> Outcome {
        let out = self.cmd.output().expect("failed to spawn podex");
        let outcome = Outcome::from(out.clone());
        assert_eq!(
            out.status.code(),
            Some(code),
            "unexpected exit status\nstderr: {}",
            outcome.stderr
        );
        outcome
    }
}

pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Outcome {
    fn from(out: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        }
    }
}

impl Outcome {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {needle:?}:\n{}",
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {needle:?}:\n{}",
            self.stderr
        );
        self
    }

    pub fn stdout_empty(self) -> Self {
        assert!(
            self.stdout.is_empty(),
            "expected empty stdout:\n{}",
            self.stdout
        );
        self
    }
}

/// A kubeconfig pointing at `server`, written to a temp file.
pub fn kubeconfig(server: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp kubeconfig");
    write!(
        file,
        r#"apiVersion: v1
kind: Config
clusters:
- name: spec
  cluster:
    server: {server}
    insecure-skip-tls-verify: true
contexts:
- name: spec
  context:
    cluster: spec
    user: spec
current-context: spec
users:
- name: spec
  user:
    token: spec-token
"#
    )
    .expect("write kubeconfig");
    file
}
