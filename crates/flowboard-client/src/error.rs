//! Client error types.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to the flowboard APIs.
///
/// Transient I/O failures are surfaced for the caller to render as a
/// dismissable notification; nothing here triggers an automatic retry, and
/// editor state is never rolled back because the client never mutates it.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Endpoint URL could not be built from the configured base.
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// A run was requested for a pipeline that has never been saved.
    /// Rejected before any request is made.
    #[error("pipeline must be saved before it can be run")]
    UnsavedPipeline,
}

impl Error {
    /// Returns whether this error came from a timed-out request.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Reqwest(e) if e.is_timeout())
    }
}
