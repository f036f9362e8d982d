//! The five inputs a signature is bound to, and the signature itself.

use crate::timestamp::Timestamp;
use std::fmt;

/// A request as seen by the signer.
///
/// Built fresh for every call and never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct SignableRequest<'a> {
    method: &'a str,
    path: &'a str,
    access_token: &'a str,
    body: &'a [u8],
    timestamp: &'a Timestamp,
}

impl<'a> SignableRequest<'a> {
    /// # Arguments
    /// * `method` - HTTP method, e.g. "GET"
    /// * `path` - Request path including its query string
    /// * `access_token` - Bearer token presented with the request
    /// * `body` - Body bytes exactly as they are sent (empty for none)
    /// * `timestamp` - Value of the `X-API-Timestamp` header
    pub fn new(
        method: &'a str,
        path: &'a str,
        access_token: &'a str,
        body: &'a [u8],
        timestamp: &'a Timestamp,
    ) -> Self {
        Self {
            method,
            path,
            access_token,
            body,
            timestamp,
        }
    }

    pub fn method(&self) -> &'a str {
        self.method
    }

    pub fn path(&self) -> &'a str {
        self.path
    }

    pub fn access_token(&self) -> &'a str {
        self.access_token
    }

    pub fn body(&self) -> &'a [u8] {
        self.body
    }

    pub fn timestamp(&self) -> &'a Timestamp {
        self.timestamp
    }
}

/// Lowercase hex HMAC-SHA256 signature (64 characters).
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(String);

impl Signature {
    pub(crate) fn new(hex: String) -> Self {
        Self(hex)
    }

    /// The header value. Do not log it.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Signature([REDACTED])")
    }
}
