// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! podex: run one command in every pod matching a label selector

mod args;
mod color;
mod config;
mod env;
mod exit_error;
mod logging;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use podex_adapters::{KubeDiscovery, KubeExecutor};
use podex_core::render;
use podex_engine::Runner;

use crate::args::Cli;
use crate::color::TerminalStyler;
use crate::exit_error::ExitError;

#[tokio::main]
async fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        let code = match e.downcast_ref::<ExitError>() {
            Some(exit) => exit.code,
            None => exit_error::EXIT_FATAL,
        };
        eprintln!("Error: {e:#}");
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let spec = cli.command_spec()?;
    let selector = cli.pod_selector()?;

    let client = config::client(cli.kubeconfig.as_deref(), cli.context.as_deref())
        .await
        .map_err(|e| ExitError::fatal(format!("{e:#}")))?;

    let runner = Runner::new(
        KubeDiscovery::new(client.clone()),
        KubeExecutor::new(client),
    );
    let report = runner
        .run(&selector, spec)
        .await
        .map_err(|e| ExitError::fatal(e.to_string()))?;

    let text = render(&report, &TerminalStyler::detect());
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("failed to write report")?;
    stdout.flush().context("failed to write report")?;
    Ok(())
}
