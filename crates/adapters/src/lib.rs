// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! podex-adapters: cluster I/O behind traits
//!
//! - [`discovery`] — resolve a label selector into pods
//! - [`exec`] — run a command inside one pod's container

pub mod discovery;
pub mod exec;

pub use discovery::{DiscoveryError, KubeDiscovery, TargetDiscovery};
pub use exec::{ExecError, KubeExecutor, RemoteExecutor, RemoteOutput};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use discovery::FakeDiscovery;
#[cfg(any(test, feature = "test-support"))]
pub use exec::{ExecCall, FakeExecutor};
