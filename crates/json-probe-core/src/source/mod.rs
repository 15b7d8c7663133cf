//! Document sources.
//!
//! A [`Source`] produces the raw bytes of a JSON document. Two backends are
//! provided: [`HttpSource`] for remote documents and [`FileSource`] for
//! local files.

mod file;
mod http;

pub use file::FileSource;
pub use http::{get_json, HttpSource};

use async_trait::async_trait;
use bytes::Bytes;

use crate::Result;

/// Trait for document sources
#[async_trait]
pub trait Source: Send + Sync {
    /// Load the raw document bytes
    async fn load(&self) -> Result<Bytes>;

    /// Human-readable origin of the document (URL or file path)
    fn describe(&self) -> String;
}
