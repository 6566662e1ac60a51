// SPDX-License-Identifier: MIT

//! Dispatcher: per-tick job evaluation and hot reload
//!
//! The dispatcher owns one job table generation plus the tracker and change
//! detector scoped to it. An external driver calls [`Dispatcher::tick`] once
//! per second; dispatch and reload run sequentially within a tick, so the
//! table and tracker need no locking.

use crate::adapters::{ConfigSource, Launcher};
use crate::clock::Clock;
use crate::detector::ChangeDetector;
use crate::table::{JobTable, LoadError};
use crate::tracker::ProcessTracker;
use thiserror::Error;

/// Fatal errors establishing the initial generation
///
/// Only startup can fail this way: once a valid generation exists, reload
/// failures are logged and retried instead of surfaced.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("cannot read job file: {0}")]
    SourceUnreadable(#[from] crate::adapters::SourceError),
    #[error("invalid job file: {0}")]
    InvalidJobs(#[from] LoadError),
}

/// What one tick did, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Jobs launched this tick
    pub launched: usize,
    /// Whether a reload swapped in a new generation
    pub reloaded: bool,
}

/// Drives job dispatch against the active table generation
pub struct Dispatcher<L, S, C> {
    launcher: L,
    source: S,
    clock: C,
    table: JobTable,
    tracker: ProcessTracker,
    detector: ChangeDetector,
}

impl<L, S, C> Dispatcher<L, S, C>
where
    L: Launcher,
    S: ConfigSource,
    C: Clock,
{
    /// Load generation 0 from the source and start dispatching
    ///
    /// An unreadable or unparsable source here is fatal to the caller: there
    /// is no prior generation to fall back on.
    pub async fn start(launcher: L, source: S, clock: C) -> Result<Self, DispatchError> {
        let lines = source.read_lines().await?;
        let table = JobTable::parse(0, &lines)?;
        let marker = source.modification_marker().await.ok();

        tracing::info!(jobs = table.len(), "job table loaded");

        Ok(Self {
            launcher,
            source,
            clock,
            table,
            tracker: ProcessTracker::new(),
            detector: ChangeDetector::new(marker),
        })
    }

    /// Run one tick: dispatch matching jobs, then reload if the source changed
    pub async fn tick(&mut self) -> TickReport {
        let now = self.clock.now_local();
        tracing::debug!(%now, generation = self.table.generation(), "tick");

        let mut launched = 0;
        for job in self.table.jobs() {
            if !job.spec.matches(&now) {
                continue;
            }
            match self.launcher.spawn(&job.command, &job.args).await {
                Ok(handle) => {
                    tracing::info!(%handle, command = %job.command, "job launched");
                    self.tracker.track(handle);
                    launched += 1;
                }
                // Non-fatal: the job just does not run this cycle
                Err(e) => tracing::warn!(error = %e, "job launch failed"),
            }
        }

        let reloaded = self.maybe_reload().await;
        TickReport { launched, reloaded }
    }

    /// Send a termination request to every process of the current generation
    /// and clear the tracker
    pub async fn terminate_generation(&mut self) {
        for handle in self.tracker.drain() {
            self.launcher.terminate(handle).await;
        }
    }

    /// Reload if the detector reports a source change
    ///
    /// On reparse failure the old table stays active and the marker stays
    /// unacknowledged, so the next tick retries.
    async fn maybe_reload(&mut self) -> bool {
        let marker = self.source.modification_marker().await.ok();
        if !self.detector.changed(marker.as_ref()) {
            return false;
        }

        tracing::info!("job file changed, reloading");

        let next_generation = self.table.generation() + 1;
        let lines = match self.source.read_lines().await {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!(error = %e, "reload read failed, keeping current jobs");
                return false;
            }
        };
        let table = match JobTable::parse(next_generation, &lines) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(error = %e, "reload parse failed, keeping current jobs");
                return false;
            }
        };

        self.terminate_generation().await;
        self.table = table;
        if let Some(stamp) = marker {
            self.detector.acknowledge(stamp);
        }

        tracing::info!(
            generation = self.table.generation(),
            jobs = self.table.len(),
            "job table reloaded"
        );
        true
    }

    /// The active table generation
    pub fn table(&self) -> &JobTable {
        &self.table
    }

    /// Processes currently tracked under the active generation
    pub fn tracked(&self) -> usize {
        self.tracker.len()
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
