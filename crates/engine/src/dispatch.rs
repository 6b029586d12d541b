// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fan-out: one task per target, each pushing exactly one outcome.

use std::sync::Arc;
use std::time::Duration;

use podex_adapters::{ExecError, RemoteExecutor, RemoteOutput};
use podex_core::{CommandSpec, ExecutionOutcome, Failure, Target};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::Barrier;

/// Launches one independent execution per target.
///
/// Parallelism equals the number of targets. Tasks share only the immutable
/// command and their own clone of the executor.
#[derive(Clone)]
pub struct Dispatcher<E> {
    executor: E,
}

impl<E: RemoteExecutor> Dispatcher<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Spawn every execution and return the barrier that collects them.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, targets: Vec<Target>, spec: Arc<CommandSpec>) -> Barrier {
        // Sized to the target count so no send ever waits on the receiver
        let (tx, rx) = mpsc::channel(targets.len().max(1));
        let started = Instant::now();

        let mut pending = Vec::with_capacity(targets.len());
        for target in targets {
            let tx = tx.clone();
            let executor = self.executor.clone();
            let spec = Arc::clone(&spec);
            tracing::debug!(pod = %target, command = %spec, "dispatching");
            let key = target.clone();
            let handle = tokio::spawn(async move {
                let outcome = execute(&executor, target, &spec).await;
                if tx.send(outcome).await.is_err() {
                    tracing::warn!("barrier dropped before outcome was delivered");
                }
            });
            pending.push((key, handle));
        }
        // Only task-owned senders remain, so the channel closes once every task ends
        drop(tx);

        Barrier::new(rx, pending, started)
    }
}

/// Run the command against one target, timing the whole remote call.
pub(crate) async fn execute<E: RemoteExecutor>(
    executor: &E,
    target: Target,
    spec: &CommandSpec,
) -> ExecutionOutcome {
    let start = Instant::now();
    let result = executor.exec(&target, spec).await;
    let elapsed = start.elapsed();
    let outcome = outcome_from(target, result, elapsed);

    let elapsed_ms = elapsed.as_millis() as u64;
    match &outcome.failure {
        None => tracing::info!(pod = %outcome.target, elapsed_ms, "execution succeeded"),
        Some(f) => {
            tracing::warn!(pod = %outcome.target, elapsed_ms, error = %f, "execution failed")
        }
    }
    outcome
}

/// Classify the executor's answer into an outcome.
///
/// Transport errors discard output; stderr content marks failure but keeps
/// whatever stdout was captured.
pub(crate) fn outcome_from(
    target: Target,
    result: Result<RemoteOutput, ExecError>,
    elapsed: Duration,
) -> ExecutionOutcome {
    match result {
        Err(e) => ExecutionOutcome::failed(
            target,
            String::new(),
            Failure::Transport(e.to_string()),
            elapsed,
        ),
        Ok(RemoteOutput { stdout, stderr }) if !stderr.is_empty() => {
            ExecutionOutcome::failed(target, stdout, Failure::stderr(&stderr), elapsed)
        }
        Ok(RemoteOutput { stdout, .. }) => ExecutionOutcome::success(target, stdout, elapsed),
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
