// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;
use std::io::Write;

const KUBECONFIG: &str = r#"apiVersion: v1
kind: Config
clusters:
- name: test
  cluster:
    server: https://127.0.0.1:6443
contexts:
- name: test
  context:
    cluster: test
    user: test
current-context: test
users:
- name: test
  user:
    token: not-a-real-token
"#;

fn kubeconfig_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(KUBECONFIG.as_bytes()).unwrap();
    file
}

fn without_in_cluster_env() {
    std::env::remove_var("KUBERNETES_SERVICE_HOST");
    std::env::remove_var("KUBERNETES_SERVICE_PORT");
}

#[tokio::test]
#[serial]
async fn explicit_kubeconfig_is_loaded() {
    let file = kubeconfig_file();
    let config = resolve(Some(file.path()), None).await.unwrap();
    let url = config.cluster_url.to_string();
    assert!(
        url.starts_with("https://127.0.0.1:6443"),
        "unexpected: {url}"
    );
}

#[tokio::test]
#[serial]
async fn explicit_context_is_selected() {
    let file = kubeconfig_file();
    assert!(resolve(Some(file.path()), Some("test")).await.is_ok());
}

#[tokio::test]
#[serial]
async fn unknown_context_without_cluster_env_fails() {
    without_in_cluster_env();
    let file = kubeconfig_file();
    let err = resolve(Some(file.path()), Some("nope")).await.unwrap_err();
    assert!(err.to_string().contains("in-cluster config unavailable"));
}

#[tokio::test]
#[serial]
async fn missing_kubeconfig_without_cluster_env_fails() {
    without_in_cluster_env();
    let path = Path::new("/nonexistent/podex/kubeconfig");
    let err = resolve(Some(path), None).await.unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("/nonexistent/podex/kubeconfig"),
        "unexpected: {msg}"
    );
    assert!(
        msg.contains("in-cluster config unavailable"),
        "unexpected: {msg}"
    );
}
