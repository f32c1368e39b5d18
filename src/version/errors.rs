//! Version error types
//!
//! Error codes:
//! - VERSION_INVALID_FORMAT (REJECT)
//!
//! Parsing is the only fallible operation. Comparison, rendering and
//! hashing are total over constructed values.

use std::fmt;

use thiserror::Error;

/// Severity levels for version errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Input rejected, caller may retry with different input
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Version error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionErrorCode {
    /// Input cannot be turned into a version number
    InvalidFormat,
}

impl VersionErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            VersionErrorCode::InvalidFormat => "VERSION_INVALID_FORMAT",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            VersionErrorCode::InvalidFormat => Severity::Reject,
        }
    }
}

impl fmt::Display for VersionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Why an input was rejected as an invalid format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidFormatReason {
    /// Fewer than two tokens after splitting on `.` and `-`
    TooFewComponents { found: usize },
    /// `SNAPSHOT` appeared with no component before it to decrement
    LeadingSnapshot,
}

impl fmt::Display for InvalidFormatReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidFormatReason::TooFewComponents { found } => {
                write!(f, "expected at least 2 components, found {}", found)
            }
            InvalidFormatReason::LeadingSnapshot => {
                write!(f, "SNAPSHOT must follow at least one component")
            }
        }
    }
}

/// Version parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Input does not describe a version number
    #[error("Failed to parse '{input}' as version number: {reason}")]
    InvalidFormat {
        input: String,
        reason: InvalidFormatReason,
    },
}

impl VersionError {
    /// Too few tokens in `input`
    pub fn too_few_components(input: impl Into<String>, found: usize) -> Self {
        VersionError::InvalidFormat {
            input: input.into(),
            reason: InvalidFormatReason::TooFewComponents { found },
        }
    }

    /// `SNAPSHOT` was the first token of `input`
    pub fn leading_snapshot(input: impl Into<String>) -> Self {
        VersionError::InvalidFormat {
            input: input.into(),
            reason: InvalidFormatReason::LeadingSnapshot,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> VersionErrorCode {
        match self {
            VersionError::InvalidFormat { .. } => VersionErrorCode::InvalidFormat,
        }
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code().severity()
    }

    /// Returns the rejected input
    pub fn input(&self) -> &str {
        match self {
            VersionError::InvalidFormat { input, .. } => input,
        }
    }

    /// Returns the rejection reason
    pub fn reason(&self) -> InvalidFormatReason {
        match self {
            VersionError::InvalidFormat { reason, .. } => *reason,
        }
    }
}

/// Result type for version operations
pub type VersionResult<T> = Result<T, VersionError>;
