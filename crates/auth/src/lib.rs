//! Authentication and signing for the banking REST API.
//!
//! This crate provides secure credential management and the request
//! signature required on every authenticated call.
//!
//! # Features
//!
//! - **Secure Credentials**: The API secret is wrapped in `SecretString` to prevent
//!   accidental logging and ensure memory is zeroed on drop.
//! - **Canonicalization**: Bodies are stripped of whitespace and query parameters
//!   are sorted so that equivalent requests sign identically.
//! - **HMAC-SHA256 Signing**: Binds method, canonical URL, access token, body digest
//!   and timestamp into one lowercase hex signature.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, RequestSigner, SignableRequest, Timestamp};
//!
//! let credentials = ApiCredentials::from_env()?;
//! let signer = RequestSigner::new(&credentials);
//!
//! let timestamp = Timestamp::now();
//! let request = SignableRequest::new(
//!     "GET",
//!     "/general/rate/forex?RateType=tt&CurrencyCode=USD",
//!     access_token,
//!     b"",
//!     &timestamp,
//! );
//! let signature = signer.sign_request(&request)?;
//! ```

mod canonical;
mod credentials;
mod error;
mod request;
mod signer;
mod timestamp;

pub use canonical::{canonicalize_body, canonicalize_url};
pub use credentials::ApiCredentials;
pub use error::AuthError;
pub use request::{SignableRequest, Signature};
pub use signer::{body_digest, RequestSigner};
pub use timestamp::Timestamp;
