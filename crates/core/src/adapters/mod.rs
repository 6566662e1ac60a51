// SPDX-License-Identifier: MIT

//! Adapter modules for external I/O

pub mod fake;
pub mod traits;

// Re-export traits
pub use traits::{ConfigSource, LaunchError, Launcher, ProcessHandle, SourceError};

// Re-export fake adapters
pub use fake::{FakeConfigSource, FakeLauncher, LauncherCall};
