//! Error types for article-harvest.
//!
//! Conversion itself never fails; these errors come from retrieval,
//! configuration and output writing.

/// Error type for harvest operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure, timeout or non-success HTTP status.
    #[error("{0}")]
    Fetch(String),

    /// Response body is not valid UTF-8.
    #[error("response is not valid UTF-8: {0}")]
    Decode(String),

    /// Base location or document identifier does not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Run configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a manifest or writing the output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for harvest operations.
pub type Result<T> = std::result::Result<T, Error>;
