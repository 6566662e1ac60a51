// SPDX-License-Identifier: MIT

//! Crontab file source

use async_trait::async_trait;
use chime_core::{ConfigSource, SourceError, SourceStamp};
use std::path::PathBuf;

/// Config source reading a crontab file from disk
///
/// The whole file is read into memory in one shot, so a parse never races
/// an external writer; the modification marker is the file's mtime.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl ConfigSource for FileConfigSource {
    async fn read_lines(&self) -> Result<Vec<String>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(content.lines().map(String::from).collect())
    }

    async fn modification_marker(&self) -> Result<SourceStamp, SourceError> {
        let metadata = tokio::fs::metadata(&self.path).await?;
        Ok(SourceStamp(metadata.modified()?))
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
