// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use podex_core::test_support::strategies::{arb_failure, arb_targets};
use podex_core::{Classification, Failure, Target};
use proptest::prelude::*;
use std::time::Duration;

fn outcome(name: &str) -> ExecutionOutcome {
    ExecutionOutcome::builder().name(name).build()
}

fn names(report: &Report) -> Vec<&str> {
    report
        .entries()
        .iter()
        .map(ExecutionOutcome::name)
        .collect()
}

#[test]
fn empty_input_gives_empty_report() {
    assert!(aggregate(Vec::new()).is_empty());
}

#[test]
fn sorts_ascending_by_name() {
    let report = aggregate(vec![outcome("web-7f"), outcome("web-2a"), outcome("api-1x")]);
    assert_eq!(names(&report), vec!["api-1x", "web-2a", "web-7f"]);
}

#[test]
fn sort_is_case_sensitive() {
    let report = aggregate(vec![outcome("beta"), outcome("Beta"), outcome("alpha")]);
    assert_eq!(names(&report), vec!["Beta", "alpha", "beta"]);
}

#[test]
fn classification_is_per_entry() {
    let report = aggregate(vec![
        ExecutionOutcome::builder()
            .name("b")
            .failure(Failure::stderr("x"))
            .build(),
        outcome("a"),
    ]);
    let classes: Vec<_> = report
        .entries()
        .iter()
        .map(|e| e.classification())
        .collect();
    assert_eq!(
        classes,
        vec![Classification::Success, Classification::Failure]
    );
}

proptest! {
    #[test]
    fn order_depends_only_on_names(
        targets in arb_targets(24),
        failures in proptest::collection::vec(arb_failure(), 24),
    ) {
        let outcomes: Vec<ExecutionOutcome> = targets
            .iter()
            .zip(failures.iter().cycle())
            .map(|(t, f)| ExecutionOutcome {
                target: t.clone(),
                output: String::new(),
                failure: f.clone(),
                elapsed: Duration::from_millis(1),
            })
            .collect();

        let report = aggregate(outcomes);
        let mut expected: Vec<Target> = targets.clone();
        expected.sort();
        let got: Vec<Target> = report
            .entries()
            .iter()
            .map(|e| e.target.clone())
            .collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(report.len(), targets.len());
    }
}
