// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote execution: run one command in one pod's container and capture its
//! output streams.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Status;
use kube::api::{Api, AttachParams};
use kube::Client;
use podex_core::{CommandSpec, Target};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Errors from a single remote execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("stream failed: {0}")]
    Stream(String),
    #[error("command terminated: {0}")]
    Terminated(String),
}

/// Captured streams of a command that ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Executes a command against one target and returns its captured output.
#[async_trait]
pub trait RemoteExecutor: Clone + Send + Sync + 'static {
    async fn exec(&self, target: &Target, spec: &CommandSpec) -> Result<RemoteOutput, ExecError>;
}

/// Executor using the Kubernetes `pods/exec` subresource.
#[derive(Clone)]
pub struct KubeExecutor {
    client: Client,
}

impl KubeExecutor {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteExecutor for KubeExecutor {
    async fn exec(&self, target: &Target, spec: &CommandSpec) -> Result<RemoteOutput, ExecError> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), target.namespace());
        let ap = AttachParams::default()
            .container(spec.container())
            .stdin(false)
            .stdout(true)
            .stderr(true);

        let mut attached = pods
            .exec(target.name(), spec.argv().to_vec(), &ap)
            .await
            .map_err(|e| ExecError::Connect(e.to_string()))?;

        let status = attached.take_status();
        let stdout = attached.stdout();
        let stderr = attached.stderr();
        let (stdout, stderr) = tokio::try_join!(read_stream(stdout), read_stream(stderr))?;

        if let Some(status) = status {
            if let Some(status) = status.await {
                check_status(&status).map_err(|e| with_stderr(e, &stderr))?;
            }
        }
        attached
            .join()
            .await
            .map_err(|e| ExecError::Stream(e.to_string()))?;

        Ok(RemoteOutput { stdout, stderr })
    }
}

/// Drain an optional stream to a string. Invalid UTF-8 is replaced.
async fn read_stream(reader: Option<impl AsyncRead + Unpin>) -> Result<String, ExecError> {
    let Some(mut reader) = reader else {
        return Ok(String::new());
    };
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .await
        .map_err(|e| ExecError::Stream(e.to_string()))?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Map the exec status frame onto an error when the command did not succeed.
pub(crate) fn check_status(status: &Status) -> Result<(), ExecError> {
    if status.status.as_deref() == Some("Success") {
        return Ok(());
    }
    let message = status
        .message
        .clone()
        .or_else(|| status.reason.clone())
        .unwrap_or_else(|| "unknown failure".to_string());
    Err(ExecError::Terminated(message))
}

/// Append the command's own stderr to a termination error; the captured
/// output itself is dropped.
pub(crate) fn with_stderr(err: ExecError, stderr: &str) -> ExecError {
    let stderr = stderr.trim();
    match err {
        ExecError::Terminated(message) if !stderr.is_empty() => {
            ExecError::Terminated(format!("{message}: {stderr}"))
        }
        other => other,
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{ExecCall, FakeExecutor};

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{ExecError, RemoteExecutor, RemoteOutput};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use podex_core::{CommandSpec, Target};
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;

    /// Recorded exec invocation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ExecCall {
        pub target: Target,
        pub container: String,
        pub argv: Vec<String>,
    }

    #[derive(Clone, Default)]
    struct Script {
        delay: Duration,
        result: Option<Result<RemoteOutput, ExecError>>,
        panic: bool,
    }

    #[derive(Default)]
    struct FakeExecutorState {
        scripts: HashMap<String, Script>,
        calls: Vec<ExecCall>,
    }

    /// Fake executor with per-pod scripted results.
    ///
    /// Unscripted pods succeed immediately with empty output. Delays use
    /// `tokio::time::sleep`, so paused-clock tests control completion order.
    #[derive(Clone, Default)]
    pub struct FakeExecutor {
        inner: Arc<Mutex<FakeExecutorState>>,
    }

    impl FakeExecutor {
        pub fn new() -> Self {
            Self::default()
        }

        /// Succeed on `pod` with `stdout` and no stderr.
        pub fn respond(self, pod: &str, stdout: &str) -> Self {
            self.respond_with(pod, stdout, "")
        }

        /// Succeed on `pod` with both captured streams.
        pub fn respond_with(self, pod: &str, stdout: &str, stderr: &str) -> Self {
            let output = RemoteOutput {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            };
            self.script(pod, |s| s.result = Some(Ok(output)))
        }

        /// Fail on `pod` with `error`.
        pub fn fail(self, pod: &str, error: ExecError) -> Self {
            self.script(pod, |s| s.result = Some(Err(error)))
        }

        /// Wait `delay` before answering for `pod`.
        pub fn delay(self, pod: &str, delay: Duration) -> Self {
            self.script(pod, |s| s.delay = delay)
        }

        /// Panic instead of answering for `pod`.
        pub fn panic_on(self, pod: &str) -> Self {
            self.script(pod, |s| s.panic = true)
        }

        /// Get all recorded exec calls
        pub fn calls(&self) -> Vec<ExecCall> {
            self.inner.lock().calls.clone()
        }

        fn script(self, pod: &str, f: impl FnOnce(&mut Script)) -> Self {
            {
                let mut inner = self.inner.lock();
                f(inner.scripts.entry(pod.to_string()).or_default());
            }
            self
        }
    }

    #[async_trait]
    impl RemoteExecutor for FakeExecutor {
        #[allow(clippy::panic)]
        async fn exec(
            &self,
            target: &Target,
            spec: &CommandSpec,
        ) -> Result<RemoteOutput, ExecError> {
            let script = {
                let mut inner = self.inner.lock();
                inner.calls.push(ExecCall {
                    target: target.clone(),
                    container: spec.container().to_string(),
                    argv: spec.argv().to_vec(),
                });
                inner
                    .scripts
                    .get(target.name())
                    .cloned()
                    .unwrap_or_default()
            };
            if !script.delay.is_zero() {
                tokio::time::sleep(script.delay).await;
            }
            if script.panic {
                panic!("scripted panic for {}", target.name());
            }
            script.result.unwrap_or_else(|| Ok(RemoteOutput::default()))
        }
    }
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
