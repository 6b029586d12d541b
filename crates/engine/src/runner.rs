// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use podex_adapters::{DiscoveryError, RemoteExecutor, TargetDiscovery};
use podex_core::{CommandSpec, Report, Selector};
use thiserror::Error;

use crate::{aggregate, Dispatcher};

/// Errors fatal to a whole run
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

/// Discover, fan out, wait, aggregate.
pub struct Runner<D, E> {
    discovery: D,
    dispatcher: Dispatcher<E>,
}

impl<D: TargetDiscovery, E: RemoteExecutor> Runner<D, E> {
    pub fn new(discovery: D, executor: E) -> Self {
        Self {
            discovery,
            dispatcher: Dispatcher::new(executor),
        }
    }

    /// Run `spec` on every pod matched by `selector`.
    ///
    /// Only discovery failures abort the run; per-pod failures end up in the
    /// report.
    pub async fn run(&self, selector: &Selector, spec: CommandSpec) -> Result<Report, EngineError> {
        let targets = self.discovery.discover(selector).await?;
        if targets.is_empty() {
            tracing::info!(%selector, "no pods matched");
        }

        let barrier = self.dispatcher.dispatch(targets, Arc::new(spec));
        let expected = barrier.expected();
        let outcomes = barrier.wait().await;
        debug_assert_eq!(outcomes.len(), expected);

        let report = aggregate(outcomes);
        tracing::info!(
            total = report.len(),
            failed = report.failed(),
            "run complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
