//! Shared test utilities and strategies.

#![allow(dead_code)]

use proptest::prelude::*;
use strand::Sequence;

// ============================================================================
// FIXTURES
// ============================================================================

/// Byte sequence from text.
pub fn s(text: &str) -> Sequence<u8> {
    Sequence::from(text)
}

/// Collect a sequence back into a `Vec` for comparison against std.
pub fn to_vec<T: Clone>(seq: &Sequence<T>) -> Vec<T> {
    seq.iter().cloned().collect()
}

/// Assert every position below `len` is readable and `len` itself is not.
pub fn assert_bounds<T>(seq: &Sequence<T>, len: usize) {
    assert_eq!(seq.len(), len);
    for i in 0..len {
        assert!(seq.at(i).is_ok(), "position {} should be readable", i);
    }
    assert!(seq.at(len).is_err(), "position {} should be out of range", len);
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short sequences over a small alphabet, so shared prefixes are common.
pub fn small_alphabet_sequence() -> impl Strategy<Value = Sequence<u8>> {
    prop::collection::vec(prop::sample::select(b"abc".to_vec()), 0..8).prop_map(Sequence::from)
}

/// Arbitrary byte sequences.
pub fn byte_sequence() -> impl Strategy<Value = Sequence<u8>> {
    prop::collection::vec(any::<u8>(), 0..32).prop_map(Sequence::from)
}

/// Word-like tokens with no whitespace.
pub fn token() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_.-]{1,12}").unwrap()
}
