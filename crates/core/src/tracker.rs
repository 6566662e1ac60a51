// SPDX-License-Identifier: MIT

//! Generation-scoped registry of launched processes

use crate::adapters::ProcessHandle;

/// Records the processes launched from the active table generation
///
/// On reload the whole set is drained for termination and the tracker starts
/// empty again; a handle from generation N is never retained into N+1.
#[derive(Debug, Default)]
pub struct ProcessTracker {
    handles: Vec<ProcessHandle>,
}

impl ProcessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a launched process under the current generation
    pub fn track(&mut self, handle: ProcessHandle) {
        self.handles.push(handle);
    }

    /// Empty the tracked set, handing the outgoing handles to the caller
    pub fn drain(&mut self) -> Vec<ProcessHandle> {
        std::mem::take(&mut self.handles)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
