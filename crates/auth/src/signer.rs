//! HMAC-SHA256 request signing.

use crate::canonical::{canonicalize_body, canonicalize_url};
use crate::credentials::ApiCredentials;
use crate::error::AuthError;
use crate::request::{Signature, SignableRequest};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Lowercase hex SHA-256 of the whitespace-stripped body.
pub fn body_digest(raw: &[u8]) -> String {
    hex::encode(Sha256::digest(canonicalize_body(raw).as_bytes()))
}

/// `METHOD:canonical_url:access_token:body_digest:timestamp`.
///
/// Embedded colons are not escaped. Never log the result.
pub(crate) fn string_to_sign(request: &SignableRequest<'_>) -> Result<String, AuthError> {
    let canonical_url = canonicalize_url(request.path())?;

    Ok(format!(
        "{}:{}:{}:{}:{}",
        request.method(),
        canonical_url,
        request.access_token(),
        body_digest(request.body()),
        request.timestamp()
    ))
}

/// Request signer for authenticated API calls.
pub struct RequestSigner<'a> {
    credentials: &'a ApiCredentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the given credentials.
    pub fn new(credentials: &'a ApiCredentials) -> Self {
        Self { credentials }
    }

    /// Sign a message and return the hex-encoded signature.
    ///
    /// This computes HMAC-SHA256 of the message using the API secret
    /// and returns the result as a lowercase hex string.
    pub fn sign(&self, message: &str) -> Result<String, AuthError> {
        let mut mac = HmacSha256::new_from_slice(self.credentials.expose_secret().as_bytes())
            .map_err(|e| AuthError::SigningFailure(e.to_string()))?;

        mac.update(message.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Compute the signature binding method, canonical URL, access token,
    /// body digest and timestamp.
    ///
    /// Pure: identical inputs always yield the identical signature.
    ///
    /// # Errors
    /// `AuthError::MalformedUrl` if the path cannot be canonicalized.
    pub fn sign_request(&self, request: &SignableRequest<'_>) -> Result<Signature, AuthError> {
        let message = string_to_sign(request)?;
        self.sign(&message).map(Signature::new)
    }
}
