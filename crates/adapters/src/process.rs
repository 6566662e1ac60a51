// SPDX-License-Identifier: MIT

//! Process launcher backed by tokio child processes

use async_trait::async_trait;
use chime_core::{LaunchError, Launcher, ProcessHandle};
use std::collections::HashMap;
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use tokio::process::{Child, Command};

/// Launcher that starts jobs as detached OS processes
///
/// Children are held in a shared map keyed by handle so a later terminate
/// can reach them; the scheduler never waits on a job synchronously.
#[derive(Clone, Default)]
pub struct ProcessLauncher {
    children: Arc<Mutex<HashMap<ProcessHandle, Child>>>,
    next_id: Arc<Mutex<u64>>,
}

impl ProcessLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop map entries for children that already exited
    ///
    /// Runs opportunistically on each spawn so long-lived schedulers do not
    /// accumulate exited children.
    fn reap_exited(&self) {
        let mut children = self.children.lock().unwrap_or_else(|e| e.into_inner());
        children.retain(|handle, child| match child.try_wait() {
            Ok(Some(status)) => {
                tracing::debug!(%handle, %status, "job exited");
                false
            }
            Ok(None) => true,
            Err(e) => {
                tracing::warn!(%handle, error = %e, "cannot poll job status");
                true
            }
        });
    }
}

#[async_trait]
impl Launcher for ProcessLauncher {
    async fn spawn(&self, command: &str, args: &[String]) -> Result<ProcessHandle, LaunchError> {
        self.reap_exited();

        let child = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| LaunchError::SpawnFailed {
                command: command.to_string(),
                message: e.to_string(),
            })?;

        let handle = {
            let mut next = self.next_id.lock().unwrap_or_else(|e| e.into_inner());
            *next += 1;
            ProcessHandle(*next)
        };

        self.children
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(handle, child);

        Ok(handle)
    }

    async fn terminate(&self, handle: ProcessHandle) {
        let child = self
            .children
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&handle);

        let Some(mut child) = child else {
            tracing::debug!(%handle, "terminate for unknown handle, ignoring");
            return;
        };

        if let Err(e) = child.start_kill() {
            // Usually the process exited on its own already
            tracing::debug!(%handle, error = %e, "kill request not delivered");
        }

        // Reap in the background; termination is fire-and-forget
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) => tracing::debug!(%handle, %status, "job terminated"),
                Err(e) => tracing::warn!(%handle, error = %e, "wait after kill failed"),
            }
        });
    }
}
