use rest_client::RestError;
use thiserror::Error;

/// Errors that can occur while obtaining an access token.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// Transport or decode failure.
    #[error("REST client error: {0}")]
    Rest(#[from] RestError),

    /// The token endpoint answered with a non-2xx status.
    #[error("Token request rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body as text.
        body: String,
    },

    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}
