//! Structured JSON logger for vernum
//!
//! - Structured logs (JSON)
//! - Deterministic key ordering
//! - Explicit severity levels
//! - One log line = one event
//! - Synchronous, no buffering
//! - Filtered by a process-wide minimum severity, silent by default

#[cfg(test)]
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::Deserialize;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Per-token parse detail
    Trace = 0,
    /// Noteworthy but accepted input
    Info = 1,
    /// Rejected input
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => Severity::Trace,
            1 => Severity::Info,
            2 => Severity::Warn,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unrecognized severity name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSeverity(pub String);

impl fmt::Display for UnknownSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown severity '{}', expected one of trace, info, warn, error",
            self.0
        )
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

static MIN_SEVERITY: AtomicU8 = AtomicU8::new(Severity::Error as u8);

/// A structured logger that outputs JSON logs to stderr
pub struct Logger;

impl Logger {
    /// Set the lowest severity that will be written
    pub fn set_min_severity(severity: Severity) {
        MIN_SEVERITY.store(severity as u8, Ordering::Relaxed);
    }

    /// Lowest severity that will be written
    pub fn min_severity() -> Severity {
        Severity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
    }

    /// Whether events at `severity` are currently written
    pub fn enabled(severity: Severity) -> bool {
        severity >= capture_threshold().unwrap_or_else(Self::min_severity)
    }

    /// Log an event with the given severity and fields
    ///
    /// Fields are output in deterministic order (alphabetical by key)
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if !Self::enabled(severity) {
            return;
        }
        let line = Self::render(severity, event, fields);
        if !capture_line(&line) {
            let mut stderr = io::stderr();
            let _ = stderr.write_all(line.as_bytes());
            let _ = stderr.flush();
        }
    }

    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut output = String::with_capacity(128);

        // event and severity lead, remaining keys sorted
        output.push_str("{\"event\":");
        Self::push_json_string(&mut output, event);
        output.push_str(",\"severity\":\"");
        output.push_str(severity.as_str());
        output.push('"');

        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted_fields {
            output.push(',');
            Self::push_json_string(&mut output, key);
            output.push(':');
            Self::push_json_string(&mut output, value);
        }

        output.push_str("}\n");
        output
    }

    fn push_json_string(output: &mut String, s: &str) {
        output.push_str(&serde_json::Value::String(s.to_owned()).to_string());
    }
}

#[cfg(test)]
thread_local! {
    static CAPTURE: RefCell<Option<(Severity, String)>> = const { RefCell::new(None) };
}

#[cfg(test)]
fn capture_threshold() -> Option<Severity> {
    CAPTURE.with(|capture| capture.borrow().as_ref().map(|(min, _)| *min))
}

#[cfg(not(test))]
fn capture_threshold() -> Option<Severity> {
    None
}

#[cfg(test)]
fn capture_line(line: &str) -> bool {
    CAPTURE.with(|capture| match capture.borrow_mut().as_mut() {
        Some((_, buffer)) => {
            buffer.push_str(line);
            true
        }
        None => false,
    })
}

#[cfg(not(test))]
fn capture_line(_line: &str) -> bool {
    false
}

/// Run `f` with this thread's events captured at threshold `min`
///
/// Returns one parsed JSON object per emitted line.
#[cfg(test)]
pub(crate) fn capture_events<F: FnOnce()>(min: Severity, f: F) -> Vec<serde_json::Value> {
    CAPTURE.with(|capture| *capture.borrow_mut() = Some((min, String::new())));
    f();
    let captured = CAPTURE
        .with(|capture| capture.borrow_mut().take())
        .map(|(_, buffer)| buffer)
        .unwrap_or_default();
    captured
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

/// Capture logs to a buffer for testing
#[cfg(test)]
pub(crate) fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    Logger::render(severity, event, fields)
}
