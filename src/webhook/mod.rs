//! Inbound webhook handling: payload shapes and signature verification.
//!
//! The provider signs every callback it delivers: header
//! `X-Hook-Signature` carries a base64 RSA/PKCS#1 v1.5 signature over
//! the exact raw body bytes, hashed with SHA-512. [`verify`] proves an
//! inbound request was signed by the holder of the provider's private
//! key before any of its content is trusted.

mod error;
mod payload;
mod verify;


pub use error::VerificationError;
pub use payload::{MastercardFeedDetails, WebhookFeedItem, WebhookPayload};
pub use verify::{SIGNATURE_HEADER, verify};
