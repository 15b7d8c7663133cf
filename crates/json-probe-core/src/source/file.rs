//! Local-file document source.

use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use tracing::debug;

use super::Source;
use crate::Result;

/// Source reading a document from the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Source for FileSource {
    async fn load(&self) -> Result<Bytes> {
        debug!("Reading {}", self.path.display());
        let data = tokio::fs::read(&self.path).await?;
        Ok(Bytes::from(data))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
