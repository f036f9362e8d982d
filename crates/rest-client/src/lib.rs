//! Authenticated REST transport.
//!
//! This crate provides a thin wrapper around `reqwest` with:
//!
//! - Per-call HMAC signatures (`X-API-Timestamp`, `X-API-Signature`)
//! - Bearer token, origin and API key headers
//! - Raw responses for every status code, with optional JSON decoding
//! - Bounded calls (configurable timeout) and cooperative cancellation
//! - Severity-gated logging that never includes secrets or signatures
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::{ApiConfig, RestClient};
//! use reqwest::Method;
//!
//! let client = RestClient::new(ApiConfig::from_env()?)?;
//! let rates: serde_json::Value = client
//!     .call_json(
//!         Method::GET,
//!         "/general/rate/forex?RateType=tt&CurrencyCode=USD",
//!         &access_token,
//!         None,
//!         b"",
//!     )
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod response;

pub use client::{RestClient, HEADER_API_KEY, HEADER_SIGNATURE, HEADER_TIMESTAMP};
pub use config::{ApiConfig, DEFAULT_TIMEOUT};
pub use error::RestError;
pub use reqwest::{Method, StatusCode};
pub use response::RawResponse;
pub use tokio_util::sync::CancellationToken;
