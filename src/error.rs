//! Error types for the iTunes Store API client.

use thiserror::Error;

/// Errors that can occur when talking to the iTunes Store.
#[derive(Debug, Error)]
pub enum ItunesError {
    /// HTTP transport error (connection refused, timeout, DNS failure, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not parse as JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTTP client could not be constructed from its configuration.
    /// Raised before any network I/O is attempted.
    #[error("client configuration error: {0}")]
    Config(String),
}

/// Convenience alias for `Result<T, ItunesError>`.
pub type Result<T> = std::result::Result<T, ItunesError>;
