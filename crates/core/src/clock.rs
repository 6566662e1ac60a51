// SPDX-License-Identifier: MIT

//! Clock abstraction for testable wall-clock time

use chrono::Timelike;
use std::fmt;
use std::sync::{Arc, Mutex};

/// A local wall-clock reading at one-second resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl LocalTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// A clock that provides the current local time
pub trait Clock: Clone + Send + Sync + 'static {
    fn now_local(&self) -> LocalTime;
}

/// Real system clock reading local time
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_local(&self) -> LocalTime {
        let now = chrono::Local::now();
        LocalTime {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<LocalTime>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::at(0, 0, 0)
    }

    /// Create a clock frozen at the given time
    pub fn at(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            current: Arc::new(Mutex::new(LocalTime::new(hour, minute, second))),
        }
    }

    /// Set the clock to a specific time
    pub fn set(&self, hour: u32, minute: u32, second: u32) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = LocalTime::new(hour, minute, second);
    }

    /// Advance the clock by the given number of seconds, wrapping at midnight
    pub fn advance_secs(&self, secs: u32) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        let total = (current.hour * 3600 + current.minute * 60 + current.second + secs) % 86_400;
        *current = LocalTime::new(total / 3600, (total / 60) % 60, total % 60);
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now_local(&self) -> LocalTime {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
