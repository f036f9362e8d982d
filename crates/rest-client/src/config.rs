//! Immutable configuration shared by every call.

use crate::error::RestError;
use auth::ApiCredentials;
use common::LogLevel;
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Credentials, endpoint and HTTP settings for a `RestClient`.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    credentials: ApiCredentials,
    base_url: String,
    timeout: Duration,
    log_level: LogLevel,
}

impl ApiConfig {
    /// Create a config with the default timeout and log level.
    pub fn new(credentials: ApiCredentials, base_url: &str) -> Self {
        Self {
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            log_level: LogLevel::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Looks for the credential variables read by `ApiCredentials::from_env`
    /// plus:
    /// - `BANK_API_URL` - Base URL (required)
    /// - `BANK_API_TIMEOUT_SECS` - Request timeout in seconds (default 60)
    /// - `BANK_API_LOG_LEVEL` - 0-3 or none/errors/info/debug (default info)
    pub fn from_env() -> Result<Self, RestError> {
        let credentials = ApiCredentials::from_env()?;

        let base_url = std::env::var("BANK_API_URL")
            .map_err(|_| RestError::Config("missing environment variable: BANK_API_URL".into()))?;

        let timeout = match std::env::var("BANK_API_TIMEOUT_SECS") {
            Ok(val) => val.trim().parse::<u64>().map(Duration::from_secs).map_err(|e| {
                RestError::Config(format!("invalid BANK_API_TIMEOUT_SECS '{}': {}", val, e))
            })?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self::new(credentials, &base_url)
            .with_timeout(timeout)
            .with_log_level(LogLevel::from_env()))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn credentials(&self) -> &ApiCredentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }
}
