//! Error types for remote suggestion lookups

use thiserror::Error;

/// Failure of a remote search request
///
/// Every variant collapses into a single `SearchError` action in the state;
/// its `Display` output is the message shown to the user.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport-level failure (connect, timeout, TLS, ...)
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Response body was not a list of results
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured API address could not be combined with the query
    #[error("Invalid API url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Application-level failure reported by a remote backend
    #[error("{0}")]
    Remote(String),
}

impl SearchError {
    /// Build a status error, preferring the server supplied message
    pub fn status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error: {}", status));
        Self::Status { status, message }
    }

    /// Whether the request never produced a response
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
