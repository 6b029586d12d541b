// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completion barrier for dispatched executions.

use std::collections::HashSet;

use podex_core::{ExecutionOutcome, Failure, Target};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Holds the receiving end of the completion channel plus every task handle.
///
/// [`Barrier::wait`] returns only after all launched executions have ended,
/// with exactly one outcome per target. There is no upper bound on how long
/// that takes.
pub struct Barrier {
    rx: mpsc::Receiver<ExecutionOutcome>,
    pending: Vec<(Target, JoinHandle<()>)>,
    started: Instant,
}

impl Barrier {
    pub(crate) fn new(
        rx: mpsc::Receiver<ExecutionOutcome>,
        pending: Vec<(Target, JoinHandle<()>)>,
        started: Instant,
    ) -> Self {
        Self {
            rx,
            pending,
            started,
        }
    }

    /// Number of executions this barrier waits for.
    pub fn expected(&self) -> usize {
        self.pending.len()
    }

    /// Wait for every execution, in whatever order they finish.
    pub async fn wait(mut self) -> Vec<ExecutionOutcome> {
        let expected = self.pending.len();
        let mut outcomes = Vec::with_capacity(expected);
        while let Some(outcome) = self.rx.recv().await {
            outcomes.push(outcome);
        }

        // Channel closed: every task has dropped its sender. Any target still
        // missing an outcome belongs to a task that died before sending.
        if outcomes.len() < expected {
            let reported: HashSet<Target> = outcomes.iter().map(|o| o.target.clone()).collect();
            for (target, handle) in self.pending {
                if reported.contains(&target) {
                    continue;
                }
                let reason = match handle.await {
                    Err(e) if e.is_panic() => "task panicked".to_string(),
                    Err(e) => e.to_string(),
                    Ok(()) => "no outcome reported".to_string(),
                };
                tracing::error!(pod = %target, %reason, "execution aborted");
                outcomes.push(ExecutionOutcome::failed(
                    target,
                    String::new(),
                    Failure::Aborted(reason),
                    self.started.elapsed(),
                ));
            }
        }

        outcomes
    }
}

#[cfg(test)]
#[path = "barrier_tests.rs"]
mod tests;
