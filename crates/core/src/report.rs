// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::ExecutionOutcome;

/// Outcomes of one run, one per target, ordered by target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<ExecutionOutcome>,
}

impl Report {
    /// Wrap outcomes that are already sorted by target.
    pub fn from_ordered(entries: Vec<ExecutionOutcome>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].target <= w[1].target));
        Self { entries }
    }

    pub fn entries(&self) -> &[ExecutionOutcome] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|e| e.is_failure()).count()
    }

    pub fn succeeded(&self) -> usize {
        self.len() - self.failed()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
