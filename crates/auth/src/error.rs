use thiserror::Error;

/// Errors that can occur while loading credentials or signing requests.
///
/// Messages never carry the API secret, the string to sign or a computed
/// signature.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The request path or query could not be parsed.
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),

    /// The hashing primitive rejected its input.
    #[error("Signing failure: {0}")]
    SigningFailure(String),

    /// A supplied timestamp is not valid RFC 3339.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
