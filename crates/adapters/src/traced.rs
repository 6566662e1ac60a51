// SPDX-License-Identifier: MIT

//! Traced adapter wrappers for consistent observability

use async_trait::async_trait;
use chime_core::{LaunchError, Launcher, ProcessHandle};

/// Wrapper that adds tracing to any Launcher
#[derive(Clone)]
pub struct TracedLauncher<L> {
    inner: L,
}

impl<L> TracedLauncher<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<L: Launcher> Launcher for TracedLauncher<L> {
    async fn spawn(&self, command: &str, args: &[String]) -> Result<ProcessHandle, LaunchError> {
        let span = tracing::info_span!("launcher.spawn", command);
        let _guard = span.enter();

        tracing::debug!(arg_count = args.len(), "starting");

        let start = std::time::Instant::now();
        let result = self.inner.spawn(command, args).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(handle) => tracing::info!(
                %handle,
                elapsed_ms = elapsed.as_millis() as u64,
                "process started"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "spawn failed"
            ),
        }

        result
    }

    async fn terminate(&self, handle: ProcessHandle) {
        let span = tracing::info_span!("launcher.terminate", %handle);
        let _guard = span.enter();

        self.inner.terminate(handle).await;
        // terminate never reports failure; the request going out is the event
        tracing::info!("termination requested");
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
