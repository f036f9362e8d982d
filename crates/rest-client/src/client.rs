//! Authenticated REST client wrapper around reqwest.

use crate::config::ApiConfig;
use crate::error::RestError;
use crate::response::RawResponse;
use auth::{ApiCredentials, RequestSigner, SignableRequest, Timestamp};
use common::LogLevel;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, ORIGIN};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

/// API key header.
pub const HEADER_API_KEY: &str = "x-api-key";
/// Signing timestamp header.
pub const HEADER_TIMESTAMP: &str = "x-api-timestamp";
/// Request signature header.
pub const HEADER_SIGNATURE: &str = "x-api-signature";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Headers set by the client on signed calls; caller headers cannot replace them.
const AUTH_HEADERS: [&str; 5] = [
    "authorization",
    "origin",
    HEADER_API_KEY,
    HEADER_TIMESTAMP,
    HEADER_SIGNATURE,
];

/// REST client that signs every call.
///
/// Holds no mutable state; one instance can serve concurrent calls and
/// shares a single connection pool between them.
pub struct RestClient {
    client: Client,
    base_url: String,
    credentials: ApiCredentials,
    log_level: LogLevel,
}

impl RestClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            credentials: config.credentials().clone(),
            log_level: config.log_level(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured transport log verbosity.
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Make a signed request and read the full response.
    ///
    /// Any status code is returned as a `RawResponse`; the API often reports
    /// failures inside a 200 body.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Request path with query string (e.g., "/general/rate/forex?RateType=tt")
    /// * `access_token` - Bearer token
    /// * `headers` - Optional additional headers
    /// * `body` - JSON body exactly as serialized (empty for none)
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        access_token: &str,
        headers: Option<&[(&str, &str)]>,
        body: &[u8],
    ) -> Result<RawResponse, RestError> {
        let path = normalize_path(path);
        let timestamp = Timestamp::now();

        let request = SignableRequest::new(method.as_str(), &path, access_token, body, &timestamp);
        let signature = RequestSigner::new(&self.credentials)
            .sign_request(&request)
            .inspect_err(|e| {
                if self.log_level.logs_errors() {
                    tracing::error!(method = %method, path = %path, error = %e, "Cannot sign request");
                }
            })?;

        let mut header_map = HeaderMap::new();
        header_map.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        header_map.insert(
            AUTHORIZATION,
            sensitive_value("authorization", &format!("Bearer {}", access_token))?,
        );
        header_map.insert(ORIGIN, header_value("origin", self.credentials.origin_host())?);
        header_map.insert(
            HeaderName::from_static(HEADER_API_KEY),
            header_value(HEADER_API_KEY, self.credentials.api_key())?,
        );
        header_map.insert(
            HeaderName::from_static(HEADER_TIMESTAMP),
            header_value(HEADER_TIMESTAMP, timestamp.as_str())?,
        );
        header_map.insert(
            HeaderName::from_static(HEADER_SIGNATURE),
            sensitive_value(HEADER_SIGNATURE, signature.as_str())?,
        );
        self.merge_headers(&mut header_map, headers, &AUTH_HEADERS)?;

        self.execute(method, &path, header_map, body.to_vec()).await
    }

    /// Make a signed request and decode the JSON response.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        access_token: &str,
        headers: Option<&[(&str, &str)]>,
        body: &[u8],
    ) -> Result<T, RestError> {
        self.call(method, path, access_token, headers, body)
            .await?
            .json()
    }

    /// Make a signed request that is abandoned when `cancel` fires.
    ///
    /// Cancelling drops the in-flight request and returns
    /// `RestError::Cancelled`.
    pub async fn call_cancellable(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        access_token: &str,
        headers: Option<&[(&str, &str)]>,
        body: &[u8],
    ) -> Result<RawResponse, RestError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                if self.log_level.logs_info() {
                    tracing::info!(method = %method, path = %path, "Request cancelled");
                }
                Err(RestError::Cancelled)
            }
            result = self.call(method.clone(), path, access_token, headers, body) => result,
        }
    }

    /// Make an unsigned request with an explicit content type.
    ///
    /// Used for endpoints that authenticate differently, such as the token
    /// endpoint.
    pub async fn call_raw(
        &self,
        method: Method,
        path: &str,
        content_type: &str,
        headers: Option<&[(&str, &str)]>,
        body: Vec<u8>,
    ) -> Result<RawResponse, RestError> {
        let path = normalize_path(path);

        let mut header_map = HeaderMap::new();
        header_map.insert(CONTENT_TYPE, header_value("content-type", content_type)?);
        self.merge_headers(&mut header_map, headers, &[])?;

        self.execute(method, &path, header_map, body).await
    }

    /// Append caller headers, skipping any listed in `protected`.
    ///
    /// `Content-Type` replaces the default rather than adding a second value.
    fn merge_headers(
        &self,
        header_map: &mut HeaderMap,
        headers: Option<&[(&str, &str)]>,
        protected: &[&str],
    ) -> Result<(), RestError> {
        for (key, value) in headers.unwrap_or_default() {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| RestError::InvalidHeader(format!("invalid header name '{}'", key)))?;

            if protected.contains(&name.as_str()) {
                if self.log_level.logs_errors() {
                    tracing::warn!(header = %name, "Ignoring caller header that overrides authentication");
                }
                continue;
            }

            let value = header_value(name.as_str(), value)?;
            if name == CONTENT_TYPE {
                header_map.insert(name, value);
            } else {
                header_map.append(name, value);
            }
        }

        Ok(())
    }

    /// Send the request and read the whole body.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Result<RawResponse, RestError> {
        let url = self.build_url(path);

        if self.log_level.logs_info() {
            tracing::info!(method = %method, path = %path, "API request");
        }

        let mut request = self.client.request(method.clone(), &url).headers(headers);
        if !body.is_empty() {
            request = request.body(body);
        }

        let start = Instant::now();
        let result = async {
            let response = request.send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            Ok::<_, reqwest::Error>(RawResponse::new(status, bytes.to_vec()))
        }
        .await;

        match result {
            Ok(response) => {
                if self.log_level.logs_debug() {
                    tracing::debug!(
                        method = %method,
                        path = %path,
                        status = response.status().as_u16(),
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "API response"
                    );
                    tracing::debug!(body = %response.text(), "API response body");
                }
                Ok(response)
            }
            Err(e) => {
                if self.log_level.logs_errors() {
                    tracing::error!(
                        method = %method,
                        path = %path,
                        timeout = e.is_timeout(),
                        error = %e,
                        "API request failed"
                    );
                }
                Err(e.into())
            }
        }
    }

    /// Build a full URL from a normalized path.
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("log_level", &self.log_level)
            .finish()
    }
}

fn normalize_path(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{}", path))
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, RestError> {
    HeaderValue::from_str(value)
        .map_err(|_| RestError::InvalidHeader(format!("invalid value for header '{}'", name)))
}

fn sensitive_value(name: &str, value: &str) -> Result<HeaderValue, RestError> {
    let mut value = header_value(name, value)?;
    value.set_sensitive(true);
    Ok(value)
}
