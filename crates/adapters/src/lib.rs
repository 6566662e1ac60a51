// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Real I/O adapters for the chime scheduling core

pub mod process;
pub mod source;
pub mod traced;

pub use process::ProcessLauncher;
pub use source::FileConfigSource;
pub use traced::TracedLauncher;
