//! Request timestamps in the wire format expected by `X-API-Timestamp`.

use crate::error::AuthError;
use chrono::{DateTime, Local, TimeZone};
use std::fmt;

/// ISO-8601 with milliseconds and a numeric offset, e.g.
/// `2024-01-02T15:04:05.999+07:00`.
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Signing timestamp, kept as the exact string that is signed and sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp(String);

impl Timestamp {
    /// Current wall-clock time in the local zone.
    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    /// Format an explicit instant.
    pub fn at<Tz>(instant: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self(instant.format(WIRE_FORMAT).to_string())
    }

    /// Accept a caller-supplied RFC 3339 string verbatim.
    ///
    /// The text is kept as given so that replays sign byte-identically.
    pub fn from_rfc3339(value: &str) -> Result<Self, AuthError> {
        DateTime::parse_from_rfc3339(value)
            .map_err(|e| AuthError::InvalidTimestamp(format!("{value}: {e}")))?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
