//! OAuth2 client-credentials token acquisition.
//!
//! Tokens are fetched on demand and handed to the caller; nothing here
//! caches, refreshes or validates them.
//!
//! # Example
//!
//! ```rust,ignore
//! use oauth::{ClientCredentials, TokenClient};
//!
//! let credentials = ClientCredentials::from_env()?;
//! let token = TokenClient::new(&rest_client, &credentials).fetch_token().await?;
//! ```

mod client;
mod credentials;
mod error;
mod token;

pub use client::{TokenClient, TOKEN_PATH};
pub use credentials::ClientCredentials;
pub use error::OAuthError;
pub use token::AuthToken;
