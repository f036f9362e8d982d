use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Bearer token issued by the token endpoint.
///
/// Owned by the caller; nothing in the transport caches or refreshes it.
#[derive(Clone, Deserialize)]
pub struct AuthToken {
    access_token: String,
    #[serde(default)]
    token_type: String,
    /// Lifetime in seconds.
    expires_in: i64,
    #[serde(default)]
    scope: Option<String>,
    #[serde(skip, default = "Utc::now")]
    issued_at: DateTime<Utc>,
}

impl AuthToken {
    /// The bearer token to pass to `RestClient::call`.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Local time the token was received.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Issue time plus `expires_in`, saturating at the representable range.
    pub fn expires_at(&self) -> DateTime<Utc> {
        Duration::try_seconds(self.expires_in)
            .and_then(|lifetime| self.issued_at.checked_add_signed(lifetime))
            .unwrap_or(if self.expires_in < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .field("issued_at", &self.issued_at)
            .finish()
    }
}
