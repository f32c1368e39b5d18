//! Version numbers for vernum
//!
//! A version is a dot or dash separated list of integer components such as
//! "1.0.1" or "1.0-52", with `*` and `SNAPSHOT` as special tokens.
//!
//! # Design Principles
//!
//! - Immutable after parsing
//! - Total ordering, shorter prefix is older
//! - Lenient: unknown tokens become `0` instead of failing
//! - Only too-short input and a leading SNAPSHOT are rejected

mod errors;
mod number;

pub use errors::{InvalidFormatReason, Severity, VersionError, VersionErrorCode, VersionResult};
pub use number::{VersionNumber, WILDCARD};
