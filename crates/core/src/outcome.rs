// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-target execution results.

use std::time::Duration;

use thiserror::Error;

use crate::Target;

/// Why a target's execution counts as failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// The exec call itself could not complete (connection, auth, exit status).
    #[error("{0}")]
    Transport(String),
    /// The command ran but wrote to its error stream.
    #[error("stderr: {0}")]
    Stderr(String),
    /// The execution task died before reporting back.
    #[error("execution aborted: {0}")]
    Aborted(String),
}

impl Failure {
    /// Failure derived from captured stderr, trimmed of trailing whitespace.
    pub fn stderr(text: &str) -> Self {
        Failure::Stderr(text.trim_end().to_string())
    }
}

/// Success/failure split of an outcome, derived from its failure field alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Success,
    Failure,
}

crate::simple_display! {
    Classification {
        Success => "success",
        Failure => "failure",
    }
}

/// The result of running the command against one target.
///
/// Produced once per target by the execution that ran against it and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub target: Target,
    /// Captured standard output; may be partial when `failure` is set.
    pub output: String,
    pub failure: Option<Failure>,
    pub elapsed: Duration,
}

impl ExecutionOutcome {
    pub fn success(target: Target, output: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            target,
            output: output.into(),
            failure: None,
            elapsed,
        }
    }

    pub fn failed(
        target: Target,
        output: impl Into<String>,
        failure: Failure,
        elapsed: Duration,
    ) -> Self {
        Self {
            target,
            output: output.into(),
            failure: Some(failure),
            elapsed,
        }
    }

    pub fn name(&self) -> &str {
        self.target.name()
    }

    pub fn classification(&self) -> Classification {
        match self.failure {
            Some(_) => Classification::Failure,
            None => Classification::Success,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.classification() == Classification::Failure
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use builder::ExecutionOutcomeBuilder;

#[cfg(any(test, feature = "test-support"))]
mod builder {
    use super::{ExecutionOutcome, Failure};
    use crate::Target;
    use std::time::Duration;

    /// Test builder with sensible defaults for [`ExecutionOutcome`].
    pub struct ExecutionOutcomeBuilder {
        name: String,
        namespace: String,
        output: String,
        failure: Option<Failure>,
        elapsed: Duration,
    }

    impl Default for ExecutionOutcomeBuilder {
        fn default() -> Self {
            Self {
                name: "pod-0".to_string(),
                namespace: "default".to_string(),
                output: String::new(),
                failure: None,
                elapsed: Duration::from_millis(10),
            }
        }
    }

    impl ExecutionOutcomeBuilder {
        pub fn name(mut self, v: impl Into<String>) -> Self {
            self.name = v.into();
            self
        }

        pub fn namespace(mut self, v: impl Into<String>) -> Self {
            self.namespace = v.into();
            self
        }

        pub fn output(mut self, v: impl Into<String>) -> Self {
            self.output = v.into();
            self
        }

        pub fn failure(mut self, v: Failure) -> Self {
            self.failure = Some(v);
            self
        }

        pub fn elapsed(mut self, v: Duration) -> Self {
            self.elapsed = v;
            self
        }

        pub fn build(self) -> ExecutionOutcome {
            ExecutionOutcome {
                target: Target::new(self.name, self.namespace),
                output: self.output,
                failure: self.failure,
                elapsed: self.elapsed,
            }
        }
    }

    impl ExecutionOutcome {
        /// Create a builder with test defaults.
        pub fn builder() -> ExecutionOutcomeBuilder {
            ExecutionOutcomeBuilder::default()
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
