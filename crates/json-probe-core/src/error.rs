//! Error types for the json-probe core library.

use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the json-probe library.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key-path traversal error
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    /// HTTP retrieval error
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-path traversal errors
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError {
    /// Key missing from an object
    #[error("key '{key}' not found at {at}")]
    KeyNotFound { key: String, at: String },

    /// Array index past the end
    #[error("index {index} out of bounds (length {len}) at {at}")]
    IndexOutOfBounds { index: usize, len: usize, at: String },

    /// Tried to index an array with a non-numeric key
    #[error("cannot index array with key '{key}' at {at}")]
    KeyOnArray { key: String, at: String },

    /// Tried to descend into a scalar
    #[error("cannot descend into {found} value with segment '{segment}' at {at}")]
    NotAContainer {
        segment: String,
        found: &'static str,
        at: String,
    },

    /// Key path parsed from an empty string
    #[error("empty key path")]
    EmptyPath,
}

/// HTTP retrieval errors
#[derive(Error, Debug)]
pub enum HttpError {
    /// Request could not be sent or the response body could not be read
    #[error("GET {url} failed: {message}")]
    Request { url: String, message: String },

    /// Server responded with a non-success status
    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Client construction failed
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
