// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target discovery: one snapshot of the pods matching a selector.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{Api, ListParams};
use kube::Client;
use podex_core::{Selector, Target};
use thiserror::Error;

/// Errors from discovery operations
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to list pods for {selector}: {message}")]
    ListFailed { selector: String, message: String },
}

/// Resolves a [`Selector`] into the targets it matches at call time.
#[async_trait]
pub trait TargetDiscovery: Send + Sync + 'static {
    async fn discover(&self, selector: &Selector) -> Result<Vec<Target>, DiscoveryError>;
}

/// Discovery backed by the Kubernetes pod list API.
#[derive(Clone)]
pub struct KubeDiscovery {
    client: Client,
}

impl KubeDiscovery {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TargetDiscovery for KubeDiscovery {
    async fn discover(&self, selector: &Selector) -> Result<Vec<Target>, DiscoveryError> {
        let pods: Api<Pod> = match selector.namespace() {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        };
        let lp = ListParams::default().labels(selector.labels());
        let list = pods
            .list(&lp)
            .await
            .map_err(|e| DiscoveryError::ListFailed {
                selector: selector.to_string(),
                message: e.to_string(),
            })?;

        let targets = targets_from_pods(list.items, selector.namespace());
        tracing::info!(%selector, count = targets.len(), "discovered pods");
        Ok(targets)
    }
}

/// Convert listed pods into targets, skipping any without a name.
///
/// Pods without a namespace in their metadata inherit the requested one, or
/// `default` when listing across all namespaces.
pub(crate) fn targets_from_pods(
    pods: impl IntoIterator<Item = Pod>,
    requested_ns: Option<&str>,
) -> Vec<Target> {
    pods.into_iter()
        .filter_map(|pod| {
            let name = pod.metadata.name?;
            let namespace = pod
                .metadata
                .namespace
                .or_else(|| requested_ns.map(str::to_string))
                .unwrap_or_else(|| "default".to_string());
            Some(Target::new(name, namespace))
        })
        .collect()
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeDiscovery;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{DiscoveryError, TargetDiscovery};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use podex_core::{Selector, Target};
    use std::sync::Arc;

    struct FakeDiscoveryState {
        targets: Vec<Target>,
        error: Option<String>,
        queries: Vec<Selector>,
    }

    /// Fake discovery returning a fixed target list
    #[derive(Clone)]
    pub struct FakeDiscovery {
        inner: Arc<Mutex<FakeDiscoveryState>>,
    }

    impl FakeDiscovery {
        pub fn new(targets: Vec<Target>) -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeDiscoveryState {
                    targets,
                    error: None,
                    queries: Vec::new(),
                })),
            }
        }

        /// Make every subsequent discovery fail with `message`.
        pub fn failing(message: impl Into<String>) -> Self {
            let fake = Self::new(Vec::new());
            fake.inner.lock().error = Some(message.into());
            fake
        }

        /// Selectors this fake has been queried with
        pub fn queries(&self) -> Vec<Selector> {
            self.inner.lock().queries.clone()
        }
    }

    #[async_trait]
    impl TargetDiscovery for FakeDiscovery {
        async fn discover(&self, selector: &Selector) -> Result<Vec<Target>, DiscoveryError> {
            let mut inner = self.inner.lock();
            inner.queries.push(selector.clone());
            match &inner.error {
                Some(message) => Err(DiscoveryError::ListFailed {
                    selector: selector.to_string(),
                    message: message.clone(),
                }),
                None => Ok(inner.targets.clone()),
            }
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
