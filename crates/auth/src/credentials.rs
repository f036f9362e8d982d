//! Secure API credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of the API secret
//! and ensures memory is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// Credentials attached to every signed request.
///
/// The secret is wrapped in `SecretString` which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    api_secret: SecretString,
    origin_host: String,
}

impl ApiCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `BANK_API_KEY` - The API key (public, sent as `X-API-Key`)
    /// - `BANK_API_SECRET` - The HMAC secret (private)
    /// - `BANK_ORIGIN_HOST` - The registered origin (sent as `Origin`)
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` if any variable is not set.
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let api_key = required_var("BANK_API_KEY")?;
        let api_secret = required_var("BANK_API_SECRET")?;
        let origin_host = required_var("BANK_ORIGIN_HOST")?;

        Ok(Self::new(api_key, api_secret, origin_host))
    }

    /// Create credentials from explicit values.
    pub fn new(api_key: String, api_secret: String, origin_host: String) -> Self {
        Self {
            api_key,
            api_secret: SecretString::from(api_secret),
            origin_host,
        }
    }

    /// Get the API key (public, safe to log).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the origin host sent with every request.
    pub fn origin_host(&self) -> &str {
        &self.origin_host
    }

    /// Expose the secret for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub(crate) fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

fn required_var(name: &str) -> Result<String, AuthError> {
    std::env::var(name).map_err(|_| AuthError::MissingEnvVar(name.into()))
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("origin_host", &self.origin_host)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_new() {
        let creds = ApiCredentials::new(
            "my_api_key".into(),
            "my_secret".into(),
            "example.com".into(),
        );
        assert_eq!(creds.api_key(), "my_api_key");
        assert_eq!(creds.origin_host(), "example.com");
        assert_eq!(creds.expose_secret(), "my_secret");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = ApiCredentials::new(
            "my_api_key".into(),
            "super_secret_key".into(),
            "example.com".into(),
        );
        let debug_str = format!("{:?}", creds);

        assert!(debug_str.contains("my_api_key"));
        assert!(debug_str.contains("example.com"));
        assert!(!debug_str.contains("super_secret_key"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_clone_keeps_secret() {
        let creds = ApiCredentials::new("k".into(), "s".into(), "o".into());
        let cloned = creds.clone();
        assert_eq!(cloned.expose_secret(), "s");
    }
}
