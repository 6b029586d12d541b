// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn display_is_namespace_qualified() {
    let t = Target::new("web-2a", "prod");
    assert_eq!(t.to_string(), "prod/web-2a");
    assert_eq!(t.name(), "web-2a");
    assert_eq!(t.namespace(), "prod");
}

#[test]
fn orders_by_name_before_namespace() {
    let mut targets = vec![
        Target::new("web-7f", "a"),
        Target::new("api-1x", "z"),
        Target::new("web-2a", "a"),
    ];
    targets.sort();
    let names: Vec<_> = targets.iter().map(Target::name).collect();
    assert_eq!(names, vec!["api-1x", "web-2a", "web-7f"]);
}

#[test]
fn same_name_breaks_tie_on_namespace() {
    let a = Target::new("db-0", "alpha");
    let b = Target::new("db-0", "beta");
    assert!(a < b);
}

#[yare::parameterized(
    upper_before_lower = { "Web", "web" },
    digit_before_letter = { "pod-1", "pod-a" },
    prefix_first = { "pod", "pod-0" },
)]
fn ordering_is_case_sensitive_lexicographic(lo: &str, hi: &str) {
    assert!(Target::new(lo, "ns") < Target::new(hi, "ns"));
}
