//! Observability subsystem for vernum
//!
//! This module provides:
//! - Structured logging (JSON lines on stderr)
//! - Typed parse events
//! - Threshold configuration
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on parsing or comparison
//! 3. No async or background threads
//! 4. Silent unless enabled
//!
//! # Usage
//!
//! ```ignore
//! use vernum::observability::ObservabilityConfig;
//!
//! // VERNUM_LOG=trace
//! ObservabilityConfig::from_env()?.apply();
//! ```

mod config;
mod events;
mod logger;

pub use config::{ObservabilityConfig, LOG_ENV_VAR};
pub use events::Event;
pub use logger::{Logger, Severity, UnknownSeverity};

#[cfg(test)]
pub(crate) use logger::capture_events;

use std::fmt;

/// Observability error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservabilityErrorCode {
    /// Observability setup failed
    ObservabilityFailed,
}

impl ObservabilityErrorCode {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ObservabilityErrorCode::ObservabilityFailed => "VERSION_OBSERVABILITY_FAILED",
        }
    }
}

impl fmt::Display for ObservabilityErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Observability error
///
/// Only raised while loading configuration; emitting logs never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityError {
    code: ObservabilityErrorCode,
    message: String,
}

impl ObservabilityError {
    /// Create a new observability error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: ObservabilityErrorCode::ObservabilityFailed,
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ObservabilityErrorCode {
        self.code
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ObservabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ERROR] {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ObservabilityError {}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Log an event with fields at the event's own severity
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
