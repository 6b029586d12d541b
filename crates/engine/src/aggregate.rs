// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use podex_core::{ExecutionOutcome, Report};

/// Order collected outcomes by target name into a report.
///
/// The order depends only on the targets, never on completion order.
pub fn aggregate(mut outcomes: Vec<ExecutionOutcome>) -> Report {
    outcomes.sort_by(|a, b| a.target.cmp(&b.target));
    Report::from_ordered(outcomes)
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
