//! Error types for the HTTP transport.

use thiserror::Error;

/// Error type for a failed network round trip.
///
/// Describes what went wrong without dictating recovery strategy.
/// The client performs no retries; callers decide what is worth
/// attempting again.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS handshake problems and other network-level errors.
    #[error("connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The deadline configured on the transport expired before the
    /// server responded.
    #[error("request timed out")]
    Timeout,

    /// The request URL was rejected by the transport.
    ///
    /// Indicates a configuration error rather than a transient failure.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
