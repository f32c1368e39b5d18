//! Version Ordering Invariant Tests
//!
//! Tests for version number ordering:
//! - Lexicographic over components
//! - Shorter prefix is older
//! - Wildcard outranks finite components
//! - SNAPSHOT sorts just below its release
//! - Equality and hashing agree

use std::collections::{BTreeSet, HashSet};

use vernum::version::{InvalidFormatReason, VersionErrorCode};
use vernum::{VersionNumber, WILDCARD};

// =============================================================================
// Helper Functions
// =============================================================================

fn v(s: &str) -> VersionNumber {
    VersionNumber::parse(s).unwrap()
}

// =============================================================================
// Documented Ordering
// =============================================================================

/// 2.0.* > 2.0.1 > 2.0.1-SNAPSHOT > 2.0.0.99 > 2.0.0 == 2.0.ea > 2.0
#[test]
fn test_documented_ordering_chain() {
    let chain = ["2.0", "2.0.0", "2.0.0.99", "2.0.1-SNAPSHOT", "2.0.1", "2.0.*"];

    for pair in chain.windows(2) {
        assert!(
            v(pair[0]).is_older_than(&v(pair[1])),
            "{} should be older than {}",
            pair[0],
            pair[1]
        );
    }
}

/// "ea" is not numeric, so 2.0.ea is stored as 2.0.0.
#[test]
fn test_coerced_qualifier_equals_zero() {
    assert_eq!(v("2.0.ea"), v("2.0.0"));
    assert!(!v("2.0.ea").is_older_than(&v("2.0.0")));
    assert!(!v("2.0.ea").is_newer_than(&v("2.0.0")));
}

/// Sorting a shuffled list restores the documented order.
#[test]
fn test_sort_ascending() {
    let mut versions: Vec<VersionNumber> = ["2.0.*", "2.0", "2.0.1", "2.0.0.99", "2.0.1-SNAPSHOT"]
        .iter()
        .map(|s| v(s))
        .collect();
    versions.sort();

    let rendered: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
    assert_eq!(
        rendered,
        vec!["2.0", "2.0.0.99", "2.0.0.1000", "2.0.1", "2.0.1000"]
    );
}

// =============================================================================
// SNAPSHOT Semantics
// =============================================================================

/// N-SNAPSHOT sorts below N, and 1-SNAPSHOT is the same as 0.*
#[test]
fn test_snapshot_below_release() {
    let snapshot = v("1.0-SNAPSHOT");
    assert_eq!(snapshot.components(), &[1, -1, WILDCARD]);
    assert!(snapshot.is_older_than(&v("1.0")));
    assert!(snapshot.is_older_than(&v("1.*")));

    assert_eq!(v("1-SNAPSHOT").components(), &[0, WILDCARD]);
    assert_eq!(v("1-SNAPSHOT"), v("0.*"));
}

/// A snapshot is newer than every release before it.
#[test]
fn test_snapshot_above_previous_releases() {
    let snapshot = v("2.0.1-SNAPSHOT");
    assert!(snapshot.is_newer_than(&v("2.0.0")));
    assert!(snapshot.is_newer_than(&v("2.0.0.999")));
    assert!(snapshot.is_older_than(&v("2.0.1")));
}

/// Tokens after SNAPSHOT do not take part in ordering.
#[test]
fn test_snapshot_suffix_ignored() {
    assert_eq!(v("1.5-SNAPSHOT-20240101.1"), v("1.5-SNAPSHOT"));
}

// =============================================================================
// Shorter-Prefix Rule
// =============================================================================

#[test]
fn test_shorter_prefix_is_older() {
    assert!(v("1.0") < v("1.0.0"));
    assert!(v("1.0.0") < v("1.0.0.0"));
    assert!(v("1.0") > v("0.9.9.9"));
}

/// Any explicit trailing component beats absence, even a negative one.
#[test]
fn test_trailing_component_beats_absence() {
    let with_negative = v("1.1.0-SNAPSHOT");
    assert_eq!(with_negative.components(), &[1, 1, -1, WILDCARD]);
    assert!(with_negative.is_newer_than(&v("1.1")));
}

// =============================================================================
// Wildcard
// =============================================================================

#[test]
fn test_wildcard_outranks_finite_components() {
    assert!(v("2.*").is_newer_than(&v("2.999")));
    assert!(v("2.*").is_newer_than(&v("2.0.0.1")));
    assert!(v("2.*").is_older_than(&v("3.0")));
}

/// Components at or above the sentinel collide with the wildcard.
#[test]
fn test_wildcard_sentinel_collision() {
    assert_eq!(v("2.1000"), v("2.*"));
    assert!(v("2.2024").is_newer_than(&v("2.*")));
}

// =============================================================================
// Equality & Hashing
// =============================================================================

#[test]
fn test_equality_ignores_delimiters() {
    assert_eq!(v("1.2.3"), v("1-2-3"));
    assert_eq!(v("1.2.3"), v("1..2--3"));
}

#[test]
fn test_different_lengths_never_equal() {
    assert_ne!(v("1.0"), v("1.0.0"));
}

#[test]
fn test_hash_set_deduplicates_equal_versions() {
    let set: HashSet<VersionNumber> = ["2.0.0", "2.0.ea", "2-0-0", "2.0"]
        .iter()
        .map(|s| v(s))
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_btree_set_orders_versions() {
    let set: BTreeSet<VersionNumber> = ["1.10", "1.9", "1.*", "1.9-SNAPSHOT"]
        .iter()
        .map(|s| v(s))
        .collect();
    let first = set.iter().next().unwrap();
    let last = set.iter().next_back().unwrap();
    assert_eq!(first, &v("1.9-SNAPSHOT"));
    assert_eq!(last, &v("1.*"));
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn test_single_token_rejected() {
    let err = VersionNumber::parse("1").unwrap_err();
    assert_eq!(err.code(), VersionErrorCode::InvalidFormat);
    assert_eq!(err.code().code(), "VERSION_INVALID_FORMAT");
}

#[test]
fn test_leading_snapshot_rejected() {
    for input in ["SNAPSHOT.1", "snapshot-2-3"] {
        let err = VersionNumber::parse(input).unwrap_err();
        assert_eq!(err.reason(), InvalidFormatReason::LeadingSnapshot);
        assert_eq!(err.input(), input);
    }
}

/// Garbage is tolerated as long as there are two tokens.
#[test]
fn test_garbage_tokens_tolerated() {
    assert_eq!(v("foo.bar").components(), &[0, 0]);
    assert!(VersionNumber::parse("foobar").is_err());
}
