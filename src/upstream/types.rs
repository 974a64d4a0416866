//! Upstream error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while fetching from the country API.
///
/// All of them mean the same thing to callers: the fetch failed.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Base URL could not be parsed or extended.
    #[error("Invalid upstream URL '{0}'")]
    InvalidUrl(String),

    /// Connection, TLS, or timeout failure.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("Upstream returned status {0}")]
    Status(StatusCode),

    /// Body was not a list of country records.
    #[error("Undecodable response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
