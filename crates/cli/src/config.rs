// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cluster configuration resolution.
//!
//! An explicit kubeconfig path is tried first and falls back to in-cluster
//! configuration. Without a path, kube's usual inference applies
//! (`KUBECONFIG`, `~/.kube/config`, then in-cluster).

use std::path::Path;

use anyhow::{anyhow, Context};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};

/// Resolve cluster configuration and build a client from it.
pub async fn client(kubeconfig: Option<&Path>, context: Option<&str>) -> anyhow::Result<Client> {
    let config = resolve(kubeconfig, context).await?;
    Client::try_from(config).context("failed to create Kubernetes client")
}

async fn resolve(kubeconfig: Option<&Path>, context: Option<&str>) -> anyhow::Result<Config> {
    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };

    let Some(path) = kubeconfig else {
        if context.is_some() {
            return Config::from_kubeconfig(&options)
                .await
                .context("failed to load kubeconfig context");
        }
        return Config::infer()
            .await
            .context("failed to infer cluster configuration");
    };

    let from_file = match Kubeconfig::read_from(path) {
        Ok(kc) => Config::from_custom_kubeconfig(kc, &options)
            .await
            .map_err(anyhow::Error::from),
        Err(e) => Err(anyhow::Error::from(e)),
    };
    match from_file {
        Ok(config) => Ok(config),
        Err(file_err) => {
            tracing::warn!(
                path = %path.display(),
                error = %file_err,
                "kubeconfig unusable, trying in-cluster config"
            );
            Config::incluster().map_err(|e| {
                anyhow!(
                    "failed to load kubeconfig {}: {:#}; in-cluster config unavailable: {}",
                    path.display(),
                    file_err,
                    e
                )
            })
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
