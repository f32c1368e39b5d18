//! vernum - Dot/dash separated version numbers
//!
//! Parses versions like "1.0.2", "2.0.*" or "1.3-SNAPSHOT" and orders them.

pub mod observability;
pub mod version;

pub use version::{VersionError, VersionNumber, VersionResult, WILDCARD};
