// SPDX-License-Identifier: MIT

//! A single scheduled job: time spec, command, arguments

use crate::timespec::TimeSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the job table
///
/// Created by the parser from one crontab line and never mutated after.
/// The table that parsed it is its sole owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub spec: TimeSpec,
    /// Executable name or path, never empty
    pub command: String,
    /// Order-significant arguments, may be empty
    pub args: Vec<String>,
}

impl Job {
    pub fn new(spec: TimeSpec, command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            spec,
            command: command.into(),
            args,
        }
    }
}

impl fmt::Display for Job {
    /// Renders the job back into its crontab line form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.spec, self.command)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
