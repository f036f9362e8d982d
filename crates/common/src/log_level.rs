//! Log verbosity for the HTTP transport.
//!
//! Mirrors the numeric levels operators already configure: 0 silences the
//! transport, 3 includes raw response bodies.

use std::fmt;
use std::str::FromStr;

/// Transport log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// No transport logging.
    None = 0,
    /// Errors only.
    Errors = 1,
    /// Errors and request summaries.
    #[default]
    Info = 2,
    /// Everything, including timing and raw response bodies.
    Debug = 3,
}

impl LogLevel {
    /// Returns true if errors should be logged.
    pub fn logs_errors(&self) -> bool {
        *self >= Self::Errors
    }

    /// Returns true if informational messages should be logged.
    pub fn logs_info(&self) -> bool {
        *self >= Self::Info
    }

    /// Returns true if debug output (timing, bodies) should be logged.
    pub fn logs_debug(&self) -> bool {
        *self >= Self::Debug
    }

    /// Default `tracing` filter directive for this level.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Self::None => "off",
            Self::Errors => "error",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Load the level from `BANK_API_LOG_LEVEL`, defaulting to `Info`.
    ///
    /// Invalid values are reported and fall back to the default.
    pub fn from_env() -> Self {
        match std::env::var("BANK_API_LOG_LEVEL") {
            Ok(val) => val.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Invalid BANK_API_LOG_LEVEL, using default");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Errors => write!(f, "errors"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if let Ok(n) = value.parse::<u8>() {
            return Self::try_from(n).map_err(|_| ParseLogLevelError(s.to_string()));
        }
        match value.to_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "error" | "errors" => Ok(Self::Errors),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseLogLevelError(s.to_string())),
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ParseLogLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Errors),
            2 => Ok(Self::Info),
            3 => Ok(Self::Debug),
            other => Err(ParseLogLevelError(other.to_string())),
        }
    }
}

/// Error parsing a log level.
#[derive(Debug, Clone)]
pub struct ParseLogLevelError(String);

impl fmt::Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid log level '{}', expected 0-3 or none/errors/info/debug",
            self.0
        )
    }
}

impl std::error::Error for ParseLogLevelError {}
