//! Error types for the Synapse client

use thiserror::Error;

/// Result type alias for Synapse operations
pub type Result<T> = std::result::Result<T, SynapseError>;

/// Main error type for the Synapse client
///
/// The reference SDKs swallowed every failure at the public-method boundary
/// and returned null/false/empty sentinels, which made "no results" and
/// "the request failed" indistinguishable. Here every operation returns a
/// typed error instead; an empty result list is always `Ok`.
#[derive(Error, Debug)]
pub enum SynapseError {
    /// Connection-level failure: DNS, refused connection, broken pipe.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The configured request timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    /// Non-2xx response that is not covered by a more specific variant.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// HTTP 404. `Client::get` converts this into `Ok(None)`.
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP 401/403.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// HTTP 429.
    #[error("Rate limited by server")]
    RateLimited,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response was valid JSON but missing a field the API contract
    /// requires (e.g. `id` after a store, `results` after a search).
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Vector operands of unequal length. Raised before any network call.
    #[error("Vector dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SynapseError {
    /// Check if the error is worth retrying
    ///
    /// Drives the transport retry loop: connection failures, timeouts,
    /// throttling, and server-side 5xx responses are transient; everything
    /// else (4xx, serialization, validation) will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        match self {
            SynapseError::Transport(_) | SynapseError::Timeout | SynapseError::RateLimited => true,
            SynapseError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for SynapseError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SynapseError::Timeout
        } else if e.is_connect() {
            SynapseError::Transport(format!("connection failed: {}", e))
        } else if let Some(status) = e.status() {
            SynapseError::Http {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            SynapseError::Transport(e.to_string())
        }
    }
}
