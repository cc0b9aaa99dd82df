//! Backend error types.
//!
//! These cover construction and transport failures inside a backend.
//! Per the trait contract only `MissingApiKey` ever reaches a caller (at
//! construction time); everything else is absorbed into the operation's
//! return value before it crosses the trait boundary.

use thiserror::Error;

/// Errors that can occur when talking to an LLM backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// No API key was supplied and none was found in the environment.
    #[error("API key must be provided or set in the OPENAI_API_KEY environment variable")]
    MissingApiKey,

    /// The API returned a 429 rate limit response.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Authentication failed (invalid API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),
}
