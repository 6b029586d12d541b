// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::Parser;
use podex_core::{CommandSpec, Selector};

use crate::exit_error::ExitError;

/// Run a command in a container of every pod matching a label selector
#[derive(Parser, Debug)]
#[command(name = "podex", version, styles = crate::color::styles())]
pub struct Cli {
    /// Path to the kubeconfig file (falls back to in-cluster config)
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current one
    #[arg(long, value_name = "NAME")]
    pub context: Option<String>,

    /// Container to execute the command against
    #[arg(short = 'c', long)]
    pub container: String,

    /// Label selector to filter pods (e.g. app=web,tier!=cache)
    #[arg(short = 'l', long = "selector", value_name = "SELECTOR")]
    pub selector: String,

    /// Namespace filter (all namespaces when omitted)
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Command to execute, followed by its arguments
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// Validated command for this run.
    pub fn command_spec(&self) -> Result<CommandSpec, ExitError> {
        CommandSpec::new(&self.container, self.command.iter().cloned())
            .map_err(|e| ExitError::usage(e.to_string()))
    }

    /// Validated pod selector for this run.
    pub fn pod_selector(&self) -> Result<Selector, ExitError> {
        Selector::new(&self.selector)
            .map(|s| s.in_namespace(self.namespace.clone()))
            .map_err(|e| ExitError::usage(e.to_string()))
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
