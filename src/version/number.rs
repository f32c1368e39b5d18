//! VersionNumber - Immutable dot/dash separated version
//!
//! Parses strings like "1.0.1", "1.0-52", "2.0.*" or "1.3-SNAPSHOT" into
//! an ordered sequence of integer components.
//!
//! Special tokens:
//! - `*` is stored as [`WILDCARD`] and outranks any smaller component
//! - `SNAPSHOT` turns "N.SNAPSHOT" into "N-1.*" and ends the version
//! - any other non-numeric token is stored as `0`
//!
//! ```text
//! 2.0.* > 2.0.1 > 2.0.1-SNAPSHOT > 2.0.0.99 > 2.0.0 == 2.0.ea > 2.0
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::{Serialize, Serializer};

use super::errors::{VersionError, VersionResult};
use crate::observability::{log_event, Event, Logger};

/// Component value used for `*` and for the tail appended after `SNAPSHOT`.
///
/// Literal components of 1000 or more compare as (or above) a wildcard.
pub const WILDCARD: i32 = 1000;

const SNAPSHOT_PREFIX: &[u8] = b"snapshot";

/// A parsed, immutable version number.
///
/// Ordering is lexicographic over the components. When one version is a
/// strict prefix of the other, the shorter one is older, so `2.0 < 2.0.0`.
/// Two versions are equal only when they have the same length and the same
/// component at every position; `Hash` agrees with that equality.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionNumber {
    digits: Box<[i32]>,
}

impl VersionNumber {
    /// Parses a string like "1.0.2" into a version number.
    ///
    /// Fails with `InvalidFormat` when the input has fewer than two
    /// components, or when `SNAPSHOT` is its first component.
    pub fn parse(input: &str) -> VersionResult<Self> {
        let tokens: Vec<&str> = input
            .split(|c: char| c == '.' || c == '-')
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.len() < 2 {
            return Err(rejected(VersionError::too_few_components(input, tokens.len())));
        }

        let mut digits = Vec::with_capacity(tokens.len());
        for (index, &token) in tokens.iter().enumerate() {
            if token == "*" {
                digits.push(WILDCARD);
            } else if is_snapshot(token) {
                let Some(previous) = digits.last_mut() else {
                    return Err(rejected(VersionError::leading_snapshot(input)));
                };
                *previous = previous.wrapping_sub(1);
                digits.push(WILDCARD);

                let dropped = tokens.len() - index - 1;
                if dropped > 0 && Logger::enabled(Event::SnapshotTruncated.severity()) {
                    let dropped = dropped.to_string();
                    log_event(
                        Event::SnapshotTruncated,
                        &[("dropped", dropped.as_str()), ("input", input)],
                    );
                }
                break;
            } else {
                match token.parse::<i32>() {
                    Ok(n) => digits.push(n),
                    Err(_) => {
                        log_event(Event::TokenCoerced, &[("input", input), ("token", token)]);
                        digits.push(0);
                    }
                }
            }
        }

        let version = Self {
            digits: digits.into_boxed_slice(),
        };
        if Logger::enabled(Event::VersionParsed.severity()) {
            let rendered = version.to_string();
            log_event(
                Event::VersionParsed,
                &[("input", input), ("version", rendered.as_str())],
            );
        }
        Ok(version)
    }

    /// Returns the components in order
    #[inline]
    pub fn components(&self) -> &[i32] {
        &self.digits
    }

    /// Returns the component at `index`, if present
    #[inline]
    pub fn component(&self, index: usize) -> Option<i32> {
        self.digits.get(index).copied()
    }

    /// Number of components, always at least 2
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if any component is the wildcard value
    pub fn has_wildcard(&self) -> bool {
        self.digits.contains(&WILDCARD)
    }

    /// Returns true if `self` orders strictly before `other`
    pub fn is_older_than(&self, other: &VersionNumber) -> bool {
        self < other
    }

    /// Returns true if `self` orders strictly after `other`
    pub fn is_newer_than(&self, other: &VersionNumber) -> bool {
        self > other
    }
}

fn is_snapshot(token: &str) -> bool {
    token
        .as_bytes()
        .get(..SNAPSHOT_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(SNAPSHOT_PREFIX))
}

fn rejected(err: VersionError) -> VersionError {
    if Logger::enabled(Event::VersionRejected.severity()) {
        let reason = err.reason().to_string();
        log_event(
            Event::VersionRejected,
            &[("input", err.input()), ("reason", reason.as_str())],
        );
    }
    err
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.digits.iter().enumerate() {
            if i != 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl FromStr for VersionNumber {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for VersionNumber {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for VersionNumber {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl Serialize for VersionNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // the dotted rendering is lossy for negative components
        serializer.collect_seq(self.digits.iter())
    }
}

struct VersionNumberVisitor;

impl<'de> Visitor<'de> for VersionNumberVisitor {
    type Value = VersionNumber;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a version string or a sequence of at least 2 integers")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        VersionNumber::parse(value).map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut digits = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(16));
        while let Some(digit) = seq.next_element::<i32>()? {
            digits.push(digit);
        }
        if digits.len() < 2 {
            return Err(de::Error::invalid_length(digits.len(), &self));
        }
        Ok(VersionNumber {
            digits: digits.into_boxed_slice(),
        })
    }
}

impl<'de> Deserialize<'de> for VersionNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(VersionNumberVisitor)
    }
}
