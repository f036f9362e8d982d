//! Shared configuration and logging helpers.

mod log_level;
mod logging;

pub use log_level::{LogLevel, ParseLogLevelError};
pub use logging::init_logging;
