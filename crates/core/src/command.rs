// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

use thiserror::Error;

/// Errors from building a [`CommandSpec`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandSpecError {
    #[error("container name must not be empty")]
    EmptyContainer,
    #[error("command to execute is required")]
    EmptyCommand,
}

/// The container to exec into and the argument vector to run there.
///
/// Identical across every target of a run and never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    container: String,
    argv: Vec<String>,
}

impl CommandSpec {
    pub fn new(
        container: impl Into<String>,
        argv: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, CommandSpecError> {
        let container = container.into();
        if container.is_empty() {
            return Err(CommandSpecError::EmptyContainer);
        }
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        if argv.is_empty() {
            return Err(CommandSpecError::EmptyCommand);
        }
        Ok(Self { container, argv })
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
