//! REST client error types.

use auth::AuthError;
use thiserror::Error;

/// Errors that can occur during API calls.
///
/// A non-2xx status is not an error here: the API reports business failures
/// inside the JSON body as often as through the status code, so callers
/// inspect the `RawResponse` themselves.
#[derive(Debug, Error)]
pub enum RestError {
    /// Malformed URL or signing failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// DNS, connection, timeout or body read failure.
    #[error("Transport error: {source}")]
    Transport {
        /// Underlying HTTP client error.
        #[source]
        source: reqwest::Error,
    },

    /// Response body is not JSON of the expected shape.
    #[error("JSON decode error (status {status}): {source}")]
    Decode {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: Vec<u8>,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A caller-supplied header name or value is invalid.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Failed to build the HTTP client or request.
    #[error("Request build error: {0}")]
    RequestBuild(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller cancelled the call before it completed.
    #[error("Request cancelled")]
    Cancelled,
}

impl RestError {
    /// Check if this error is retryable.
    ///
    /// Only transport failures are; this crate never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RestError::Transport { .. })
    }

    /// Check if this is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RestError::Transport { source } if source.is_timeout())
    }

    /// Raw body of a response that failed to decode.
    pub fn raw_body(&self) -> Option<&[u8]> {
        match self {
            RestError::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            RestError::RequestBuild(err.to_string())
        } else {
            RestError::Transport { source: err }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> RestError {
        let source = serde_json::from_slice::<serde_json::Value>(b"not json").unwrap_err();
        RestError::Decode {
            status: 200,
            body: b"not json".to_vec(),
            source,
        }
    }

    #[test]
    fn test_decode_error_keeps_raw_body() {
        let err = decode_error();
        assert_eq!(err.raw_body(), Some(&b"not json"[..]));
        assert!(!err.is_retryable());
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_auth_errors_are_not_retryable() {
        let err = RestError::from(AuthError::MalformedUrl("bad".into()));
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "Malformed URL: bad");
    }

    #[test]
    fn test_cancelled_is_not_retryable() {
        assert!(!RestError::Cancelled.is_retryable());
        assert!(RestError::Cancelled.raw_body().is_none());
    }
}
