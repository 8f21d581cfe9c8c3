//! Unified error type for all API client operations.

use crate::types::Method;

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error type covering every way an API call can fail.
///
/// One type on purpose: callers handle a single kind whether the
/// failure came from their own usage, the transport, the HTTP status,
/// or the response envelope. A zone or record that cannot be resolved
/// is an [`Api`](Self::Api) failure like any other envelope error and
/// is distinguishable only by message text.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A request body was supplied with a method that does not allow
    /// one. Raised before any network I/O.
    #[error("method {method} does not allow a request body")]
    InvalidUsage { method: Method },

    /// The transport layer failed: connection refused, TLS, timeout,
    /// malformed URL, redirect loop, or anything else the HTTP client
    /// can produce.
    #[error("transport error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// The server answered with a non-success HTTP status.
    #[error("unexpected HTTP status {status}")]
    Status { status: reqwest::StatusCode },

    /// The response body was empty, not JSON, or not a JSON object.
    #[error("malformed API response: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// The envelope signalled failure, or an expected field of a
    /// successful envelope was missing.
    #[error("{message}")]
    Api { message: String },
}
