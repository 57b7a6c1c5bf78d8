//! Detached RSA signature verification for inbound webhooks.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use http_body_util::BodyExt as _;
use rsa::pkcs8::DecodePublicKey as _;
use rsa::traits::PublicKeyParts as _;
use rsa::{Pkcs1v15Sign, RsaPublicKey};
use sha2::{Digest as _, Sha512};

use super::VerificationError;

/// Header the provider stores the detached signature in.
pub const SIGNATURE_HEADER: http::HeaderName = http::HeaderName::from_static("x-hook-signature");

/// Verifies that a webhook request was signed by the provider.
///
/// `base64_public_key` is the base64 of a DER/PKIX-encoded RSA public
/// key, as published by the provider. The signature is expected in the
/// [`SIGNATURE_HEADER`] header, base64-encoded, computed with RSA
/// PKCS#1 v1.5 over the SHA-512 digest of the exact raw body bytes.
///
/// The request body is buffered in full and then replaced with a
/// fresh, independently readable copy, so whatever consumes the
/// request afterwards is unaffected by verification having read it.
/// `None` means the request carries no body at all, which is rejected;
/// an empty body is verified like any other byte sequence.
///
/// Returns `Ok(false)` when a well-formed signature simply does not
/// match the body. A mismatch is a negative result, not a fault.
///
/// # Errors
///
/// Returns [`VerificationError`] when the verification itself cannot
/// be carried out: absent or unreadable body, malformed key, missing
/// or undecodable signature header, or a signature whose length does
/// not fit the key.
///
/// # Example
///
/// ```no_run
/// use bytes::Bytes;
/// use http_body_util::Full;
///
/// # async fn example(published_key: &str) -> Result<(), cygnet::webhook::VerificationError> {
/// let mut request = http::Request::builder()
///     .method(http::Method::POST)
///     .header("X-Hook-Signature", "...")
///     .body(Some(Full::new(Bytes::from_static(b"{}"))))
///     .unwrap();
///
/// if cygnet::webhook::verify(&mut request, published_key).await? {
///     // signed by the provider; safe to decode the payload
/// }
/// # Ok(())
/// # }
/// ```
pub async fn verify<B>(
    request: &mut http::Request<Option<B>>,
    base64_public_key: &str,
) -> Result<bool, VerificationError>
where
    B: http_body::Body + From<Bytes>,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let body = request
        .body_mut()
        .take()
        .ok_or(VerificationError::EmptyBody)?;
    let buf = body
        .collect()
        .await
        .map_err(|e| VerificationError::BodyReadFailure(Box::new(e)))?
        .to_bytes();

    // Hand the bytes back before anything below can fail, so the
    // request stays usable whatever the outcome.
    *request.body_mut() = Some(B::from(buf.clone()));

    let key = public_key_from_base64(base64_public_key)?;
    let signature = signature_from_headers(request.headers())?;

    // A PKCS#1 v1.5 signature is exactly one modulus long.
    if signature.len() != key.size() {
        return Err(VerificationError::SignatureCheckFailed);
    }

    let digest = Sha512::digest(&buf);
    let matched = key
        .verify(Pkcs1v15Sign::new::<Sha512>(), &digest, &signature)
        .is_ok();
    tracing::debug!(matched, body_len = buf.len(), "webhook signature checked");
    Ok(matched)
}

/// Decodes a base64 DER/PKIX blob into an RSA public key.
fn public_key_from_base64(key: &str) -> Result<RsaPublicKey, VerificationError> {
    let der = BASE64
        .decode(key)
        .map_err(|e| VerificationError::BadPublicKey(Box::new(e)))?;
    RsaPublicKey::from_public_key_der(&der)
        .map_err(|e| VerificationError::BadPublicKey(Box::new(e)))
}

/// Extracts and base64-decodes the detached signature header.
fn signature_from_headers(headers: &http::HeaderMap) -> Result<Vec<u8>, VerificationError> {
    let value = headers
        .get(&SIGNATURE_HEADER)
        .ok_or(VerificationError::BadSignatureEncoding)?;
    let text = value
        .to_str()
        .map_err(|_| VerificationError::BadSignatureEncoding)?;
    BASE64
        .decode(text)
        .map_err(|_| VerificationError::BadSignatureEncoding)
}
