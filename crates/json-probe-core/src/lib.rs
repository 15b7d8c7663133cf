//! Json Probe Core Library
//!
//! This crate provides the core functionality for retrieving JSON documents
//! from HTTP endpoints or local files, traversing them by key path, and
//! computing lazily-memoized summaries of their structure.

pub mod config;
pub mod document;
pub mod error;
pub mod memo;
pub mod path;
pub mod source;

pub use config::ClientConfig;
pub use document::{Document, DocumentStats};
pub use error::{Error, HttpError, PathError, Result};
pub use memo::Memo;
pub use path::{access_nested, KeyPath, Segment};
pub use source::{get_json, FileSource, HttpSource, Source};
