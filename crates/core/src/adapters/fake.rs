// SPDX-License-Identifier: MIT

//! Fake adapter implementations for testing

use super::traits::{ConfigSource, LaunchError, Launcher, ProcessHandle, SourceError};
use crate::detector::SourceStamp;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

/// Recorded launcher call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherCall {
    Spawn {
        command: String,
        args: Vec<String>,
    },
    Terminate {
        handle: ProcessHandle,
    },
}

/// Fake launcher that records calls and mints sequential handles
#[derive(Clone, Default)]
pub struct FakeLauncher {
    calls: Arc<Mutex<Vec<LauncherCall>>>,
    next_id: Arc<Mutex<u64>>,
    failing: Arc<Mutex<HashSet<String>>>,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<LauncherCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Commands passed to spawn, in call order
    pub fn spawned(&self) -> Vec<(String, Vec<String>)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                LauncherCall::Spawn { command, args } => Some((command, args)),
                _ => None,
            })
            .collect()
    }

    /// Handles passed to terminate, in call order
    pub fn terminated(&self) -> Vec<ProcessHandle> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                LauncherCall::Terminate { handle } => Some(handle),
                _ => None,
            })
            .collect()
    }

    /// Make every spawn of `command` fail
    pub fn fail_spawns_of(&self, command: &str) {
        self.failing
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(command.to_string());
    }
}

#[async_trait]
impl Launcher for FakeLauncher {
    async fn spawn(&self, command: &str, args: &[String]) -> Result<ProcessHandle, LaunchError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(LauncherCall::Spawn {
                command: command.to_string(),
                args: args.to_vec(),
            });

        let failing = self.failing.lock().unwrap_or_else(|e| e.into_inner());
        if failing.contains(command) {
            return Err(LaunchError::SpawnFailed {
                command: command.to_string(),
                message: "injected failure".to_string(),
            });
        }
        drop(failing);

        let mut next = self.next_id.lock().unwrap_or_else(|e| e.into_inner());
        *next += 1;
        Ok(ProcessHandle(*next))
    }

    async fn terminate(&self, handle: ProcessHandle) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(LauncherCall::Terminate { handle });
    }
}

#[derive(Debug)]
struct FakeSourceState {
    lines: Vec<String>,
    stamp: SourceStamp,
    read_fails: bool,
    marker_fails: bool,
}

/// Fake config source with settable content and modification stamp
#[derive(Clone)]
pub struct FakeConfigSource {
    state: Arc<Mutex<FakeSourceState>>,
}

impl FakeConfigSource {
    pub fn new(content: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeSourceState {
                lines: split_lines(content),
                stamp: SourceStamp(SystemTime::UNIX_EPOCH),
                read_fails: false,
                marker_fails: false,
            })),
        }
    }

    /// Replace the content and bump the modification stamp
    pub fn set_content(&self, content: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.lines = split_lines(content);
        state.stamp = SourceStamp(state.stamp.0 + Duration::from_secs(1));
    }

    /// Bump the modification stamp without changing content
    pub fn touch(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.stamp = SourceStamp(state.stamp.0 + Duration::from_secs(1));
    }

    /// Make content reads fail
    pub fn fail_reads(&self, fail: bool) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.read_fails = fail;
    }

    /// Make marker reads fail
    pub fn fail_marker(&self, fail: bool) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.marker_fails = fail;
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(String::from).collect()
}

fn unavailable() -> SourceError {
    SourceError::Io(std::io::Error::other("injected failure"))
}

#[async_trait]
impl ConfigSource for FakeConfigSource {
    async fn read_lines(&self) -> Result<Vec<String>, SourceError> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.read_fails {
            return Err(unavailable());
        }
        Ok(state.lines.clone())
    }

    async fn modification_marker(&self) -> Result<SourceStamp, SourceError> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.marker_fails {
            return Err(unavailable());
        }
        Ok(state.stamp)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
