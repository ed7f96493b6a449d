//! Error types for catalog retrieval.

use thiserror::Error;

/// Errors that can occur while retrieving a relay catalog.
///
/// Every variant is fatal for a selection run; there is no partial-catalog mode.
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// Directory URL could not be built.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// HTTP request failed (DNS, connect, TLS, timeout).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Directory answered with a non-success status.
    #[error("Directory returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        message: String,
    },

    /// Payload is not a JSON array of relay records.
    #[error("Malformed catalog: {0}")]
    Malformed(String),

    /// Local catalog file could not be read.
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        /// File that was being read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl RetrievalError {
    /// True for failures on the directory's side rather than ours.
    pub fn is_remote(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status >= 500,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::InvalidUrl(_) | Self::Malformed(_) | Self::Io { .. } => false,
        }
    }
}
