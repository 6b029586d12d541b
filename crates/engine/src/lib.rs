// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! podex-engine: concurrent fan-out and result aggregation
//!
//! ```text
//! targets ──► Dispatcher ──► one task per target ──► completion channel
//!                                                          │
//!                              Report ◄── aggregate ◄── Barrier::wait
//! ```

pub mod aggregate;
pub mod barrier;
pub mod dispatch;
mod runner;

pub use aggregate::aggregate;
pub use barrier::Barrier;
pub use dispatch::Dispatcher;
pub use runner::{EngineError, Runner};
