// SPDX-License-Identifier: MIT

//! chime-core: Scheduling engine for the chime cron daemon
//!
//! This crate provides:
//! - The crontab line parser and its `Job`/`TimeSpec` value types
//! - Wall-clock matching with wildcard semantics
//! - The generation-scoped job table, change detector, and process tracker
//! - The `Dispatcher` driving per-tick evaluation and hot reload
//! - Adapter traits for external I/O (process launching, config source)

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod clock;

pub mod detector;
pub mod dispatch;
pub mod job;
pub mod parser;
pub mod table;
pub mod timespec;
pub mod tracker;

// Re-exports
pub use adapters::{ConfigSource, LaunchError, Launcher, ProcessHandle, SourceError};
pub use clock::{Clock, FakeClock, LocalTime, SystemClock};
pub use detector::{ChangeDetector, SourceStamp};
pub use dispatch::{DispatchError, Dispatcher, TickReport};
pub use job::Job;
pub use parser::{parse_line, ParseError};
pub use table::{JobTable, LoadError};
pub use timespec::{TimeField, TimeSpec};
pub use tracker::ProcessTracker;

// Re-export fake adapters for other crates' tests
pub use adapters::{FakeConfigSource, FakeLauncher, LauncherCall};
