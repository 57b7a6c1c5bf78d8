//! Error types for webhook signature verification.

use thiserror::Error;

/// Error type for a verification attempt that could not be carried out.
///
/// These are hard failures, distinct from the negative-but-well-formed
/// outcome: a signature that simply does not match the body makes
/// [`verify`](crate::webhook::verify) return `Ok(false)`, not an error.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// The request has no body at all.
    ///
    /// An absent body is a caller-usage error; a present-but-empty
    /// body is verified like any other byte sequence.
    #[error("request has no body to verify")]
    EmptyBody,

    /// Reading the request body failed.
    #[error("failed to read request body: {0}")]
    BodyReadFailure(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The supplied public key is not base64, not DER/PKIX, or not RSA.
    #[error("invalid webhook public key: {0}")]
    BadPublicKey(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The `X-Hook-Signature` header is missing or not valid base64.
    #[error("X-Hook-Signature header is missing or not base64")]
    BadSignatureEncoding,

    /// The decoded signature is malformed for the given key.
    ///
    /// A PKCS#1 v1.5 signature must be exactly as long as the key
    /// modulus; anything else cannot have been produced by the key.
    #[error("signature length does not match the key modulus")]
    SignatureCheckFailed,
}
