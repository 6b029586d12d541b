// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the podex binary.

/// Log filter directive variable, in `tracing_subscriber::EnvFilter` syntax.
pub const LOG_VAR: &str = "PODEX_LOG";

/// Filter used when `PODEX_LOG` is unset or empty.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter: PODEX_LOG > "warn"
pub fn log_filter() -> String {
    std::env::var(LOG_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// `NO_COLOR=1` disables color output.
pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

/// `COLOR=1` forces color output even when stdout is not a terminal.
pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}
