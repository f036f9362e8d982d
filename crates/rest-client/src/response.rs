use crate::error::RestError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// A fully read HTTP response.
///
/// Returned for every status code; decoding is optional.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl RawResponse {
    pub(crate) fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    /// `RestError::Decode` carrying the status and raw body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, RestError> {
        serde_json::from_slice(&self.body).map_err(|source| RestError::Decode {
            status: self.status.as_u16(),
            body: self.body.clone(),
            source,
        })
    }
}
