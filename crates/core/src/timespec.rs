// SPDX-License-Identifier: MIT

//! Time specification with wildcard semantics
//!
//! A `TimeSpec` says when a job fires: hour and minute may be wildcarded,
//! the second never is. Field values carry no range validation; an
//! out-of-range value parses fine and simply never matches a real clock.

use crate::clock::LocalTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One time field: any value, or one exact value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeField {
    /// Matches any value of this field
    Any,
    /// Matches exactly this value
    At(u32),
}

impl TimeField {
    pub fn matches(&self, value: u32) -> bool {
        match self {
            TimeField::Any => true,
            TimeField::At(v) => *v == value,
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::Any => write!(f, "*"),
            TimeField::At(v) => write!(f, "{}", v),
        }
    }
}

/// When a job fires: hour/minute with wildcards, an exact second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpec {
    pub hour: TimeField,
    pub minute: TimeField,
    /// Always compared literally; the crontab format never wildcards it,
    /// so a job fires at most once per matching minute/hour window.
    pub second: u32,
}

impl TimeSpec {
    pub fn new(hour: TimeField, minute: TimeField, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// True iff the job should fire at this wall-clock second
    pub fn matches(&self, now: &LocalTime) -> bool {
        self.hour.matches(now.hour) && self.minute.matches(now.minute) && self.second == now.second
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
#[path = "timespec_tests.rs"]
mod tests;
