// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! podex-core: domain types and report rendering for the podex fan-out tool

pub mod macros;

pub mod command;
pub mod outcome;
pub mod render;
pub mod report;
pub mod selector;
pub mod target;
pub mod time_fmt;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

#[cfg(any(test, feature = "test-support"))]
pub use outcome::ExecutionOutcomeBuilder;
pub use command::{CommandSpec, CommandSpecError};
pub use outcome::{Classification, ExecutionOutcome, Failure};
pub use render::{render, Plain, Style, Styler, DIVIDER};
pub use report::Report;
pub use selector::{Selector, SelectorError};
pub use target::Target;
pub use time_fmt::format_duration;
