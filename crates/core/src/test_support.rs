// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::Target;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for run inputs and outcomes.
pub mod strategies {
    use crate::{Failure, Target};
    use proptest::collection::btree_set;
    use proptest::prelude::*;

    /// Pod-like names: lowercase, digits and dashes.
    pub fn arb_pod_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,11}"
    }

    /// A set of uniquely named targets in one namespace, in arbitrary order.
    pub fn arb_targets(max: usize) -> impl Strategy<Value = Vec<Target>> {
        btree_set(arb_pod_name(), 0..=max)
            .prop_map(|names| {
                names
                    .into_iter()
                    .map(|n| Target::new(n, "default"))
                    .collect()
            })
            .prop_shuffle()
    }

    pub fn arb_failure() -> impl Strategy<Value = Option<Failure>> {
        prop_oneof![
            Just(None),
            "[a-z ]{1,20}".prop_map(|s| Some(Failure::Transport(s))),
            "[a-z ]{1,20}".prop_map(|s| Some(Failure::Stderr(s))),
        ]
    }
}

/// Targets named `names`, all in the `default` namespace.
pub fn targets(names: &[&str]) -> Vec<Target> {
    names.iter().map(|n| Target::new(*n, "default")).collect()
}
