// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Run steps return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use thiserror::Error;

/// Cluster configuration or pod discovery failed.
pub const EXIT_FATAL: i32 = 1;
/// Invalid arguments; matches clap's own usage error code.
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, message)
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(EXIT_FATAL, message)
    }
}
