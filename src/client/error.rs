//! Error types for the request pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transport::HttpError;

/// The canonical error body the API returns for any non-2xx response.
///
/// Invariant: a non-2xx body that is missing the `Message` field, or
/// that is not JSON at all, still produces an `ErrorDetail` with an
/// empty message. The HTTP status must never be masked by a decode
/// failure on the error body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable description supplied by the API.
    ///
    /// Top-level error bodies spell the key `Message`; the error lists
    /// embedded in savings-goal responses spell it `message`.
    #[serde(rename = "Message", alias = "message", default)]
    pub message: String,
}

impl ErrorDetail {
    /// Best-effort parse of a non-2xx body.
    ///
    /// Parse failures degrade to an empty message. The status code is
    /// the primary diagnostic; the message is advisory only.
    pub(crate) fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Error type for API operations.
///
/// Every failure mode an endpoint call can hit, kept distinct so
/// callers can tell a network problem from a rejected request from a
/// contract violation. Nothing here is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be built.
    ///
    /// Covers URL joining, credential header encoding and body
    /// serialization. A local error; retrying cannot help.
    #[error("failed to build request: {0}")]
    Construction(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The network round trip failed.
    #[error("transport failure: {0}")]
    Transport(#[from] HttpError),

    /// A 2xx response body did not match the expected shape.
    ///
    /// Always reported, never ignored: a malformed success payload
    /// means the API contract has drifted.
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The API answered with a non-2xx status.
    #[error("API error ({status}): {}", .detail.message)]
    Api {
        /// HTTP status returned by the API.
        status: http::StatusCode,
        /// Parsed error detail; empty message when the body was unreadable.
        detail: ErrorDetail,
        /// Raw response body, when it was valid UTF-8.
        body: Option<String>,
    },
}

impl Error {
    /// HTTP status associated with this error, when a response was received.
    ///
    /// Lets callers branch on specific statuses (403, 404, ...) without
    /// destructuring the variant.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
