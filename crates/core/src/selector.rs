// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("label selector must not be empty")]
    EmptyLabels,
}

/// Which pods a run targets: a label selector plus an optional namespace.
///
/// A missing namespace means every namespace the credentials can list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    labels: String,
    namespace: Option<String>,
}

impl Selector {
    pub fn new(labels: impl Into<String>) -> Result<Self, SelectorError> {
        let labels = labels.into();
        if labels.trim().is_empty() {
            return Err(SelectorError::EmptyLabels);
        }
        Ok(Self {
            labels,
            namespace: None,
        })
    }

    /// Restrict discovery to one namespace. Empty strings mean "all namespaces".
    pub fn in_namespace(mut self, namespace: Option<impl Into<String>>) -> Self {
        self.namespace = namespace.map(Into::into).filter(|ns| !ns.is_empty());
        self
    }

    pub fn labels(&self) -> &str {
        &self.labels
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{} in {}", self.labels, ns),
            None => write!(f, "{} in all namespaces", self.labels),
        }
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
