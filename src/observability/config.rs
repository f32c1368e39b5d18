//! Observability configuration
//!
//! Configured externally (environment or JSON), applied once by the
//! embedding application. The default keeps parsing silent.

use std::env;

use serde::Deserialize;

use super::logger::{Logger, Severity};
use super::{ObservabilityError, ObservabilityResult};

/// Environment variable read by [`ObservabilityConfig::from_env`]
pub const LOG_ENV_VAR: &str = "VERNUM_LOG";

fn default_min_severity() -> Severity {
    Severity::Error
}

/// Logger settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObservabilityConfig {
    /// Lowest severity written to stderr
    #[serde(default = "default_min_severity")]
    pub min_severity: Severity,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            min_severity: default_min_severity(),
        }
    }
}

impl ObservabilityConfig {
    /// Create a configuration with an explicit threshold
    pub fn new(min_severity: Severity) -> Self {
        Self { min_severity }
    }

    /// Load from `VERNUM_LOG`; unset or empty yields the default
    pub fn from_env() -> ObservabilityResult<Self> {
        match env::var(LOG_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => Self::from_level(&value),
            _ => Ok(Self::default()),
        }
    }

    /// Parse a bare severity name such as `trace` or `WARN`
    pub fn from_level(level: &str) -> ObservabilityResult<Self> {
        let min_severity = level
            .parse::<Severity>()
            .map_err(|e| ObservabilityError::new(format!("Invalid {}: {}", LOG_ENV_VAR, e)))?;
        Ok(Self::new(min_severity))
    }

    /// Load from a JSON document like `{"min_severity": "trace"}`
    pub fn from_json(content: &str) -> ObservabilityResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| ObservabilityError::new(format!("Invalid observability config JSON: {}", e)))
    }

    /// Install this configuration process-wide
    pub fn apply(&self) {
        Logger::set_min_severity(self.min_severity);
    }
}
