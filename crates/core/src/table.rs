// SPDX-License-Identifier: MIT

//! Job table: one immutable generation of parsed configuration

use crate::job::Job;
use crate::parser::{parse_line, ParseError};
use thiserror::Error;

/// A parse failure tied to its line number in the source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct LoadError {
    /// 1-based line number within the crontab
    pub line: usize,
    #[source]
    pub source: ParseError,
}

/// An ordered, immutable set of jobs from one successful parse
///
/// A reload never mutates a table in place; it builds a whole new one with
/// the next generation number. One malformed line rejects the entire load,
/// so a table is always internally consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTable {
    generation: u64,
    jobs: Vec<Job>,
}

impl JobTable {
    /// Parse crontab lines into a table for the given generation
    ///
    /// Blank lines and `#` comment lines are skipped.
    pub fn parse<S: AsRef<str>>(generation: u64, lines: &[S]) -> Result<Self, LoadError> {
        let mut jobs = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let job = parse_line(line).map_err(|source| LoadError {
                line: idx + 1,
                source,
            })?;
            jobs.push(job);
        }
        Ok(Self { generation, jobs })
    }

    /// Build a table directly from jobs (test construction)
    pub fn from_jobs(generation: u64, jobs: Vec<Job>) -> Self {
        Self { generation, jobs }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Jobs in their fixed evaluation order
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
