// SPDX-License-Identifier: MIT

//! Adapter trait definitions for external I/O

use crate::detector::SourceStamp;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Launcher (process spawning)
// =============================================================================

/// Opaque identifier for a launched job process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessHandle(pub u64);

impl fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from launching a job
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to spawn {command}: {message}")]
    SpawnFailed { command: String, message: String },
}

/// Adapter that starts and terminates fire-and-forget job processes
#[async_trait]
pub trait Launcher: Clone + Send + Sync + 'static {
    /// Start `command` with `args` as an independent process
    ///
    /// The process is not waited on; the caller only keeps the handle for a
    /// possible later [`terminate`](Launcher::terminate).
    async fn spawn(&self, command: &str, args: &[String]) -> Result<ProcessHandle, LaunchError>;

    /// Request termination of a previously spawned process
    ///
    /// Best-effort and fire-and-forget: a process that already exited, or
    /// one that ignores the request, is not an error the caller can see.
    async fn terminate(&self, handle: ProcessHandle);
}

// =============================================================================
// ConfigSource (crontab file)
// =============================================================================

/// Errors from reading the configuration source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Adapter that reads the crontab and reports its modification marker
#[async_trait]
pub trait ConfigSource: Clone + Send + Sync + 'static {
    /// Read the whole source into memory, one element per line
    ///
    /// A parse always runs over this snapshot, never over a live handle, so
    /// concurrent external writes cannot corrupt it.
    async fn read_lines(&self) -> Result<Vec<String>, SourceError>;

    /// Capture the source's current modification marker
    async fn modification_marker(&self) -> Result<SourceStamp, SourceError>;
}
