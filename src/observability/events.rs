//! Observability events for vernum
//!
//! Events are explicit and typed. Each event carries a fixed severity.

use std::fmt;

use super::logger::Severity;

/// Observable events during version parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Input parsed into a version number
    VersionParsed,
    /// Input rejected as an invalid format
    VersionRejected,
    /// Non-numeric token stored as zero
    TokenCoerced,
    /// Tokens after SNAPSHOT dropped
    SnapshotTruncated,
}

impl Event {
    /// Returns the stable event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::VersionParsed => "VERSION_PARSED",
            Event::VersionRejected => "VERSION_REJECTED",
            Event::TokenCoerced => "VERSION_TOKEN_COERCED",
            Event::SnapshotTruncated => "VERSION_SNAPSHOT_TRUNCATED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::VersionParsed | Event::SnapshotTruncated => Severity::Trace,
            Event::TokenCoerced => Severity::Info,
            Event::VersionRejected => Severity::Warn,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
