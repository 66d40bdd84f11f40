//! Byte-stream adapters: token reading and raw writing.

use super::common::s;
use std::io::{BufReader, Cursor};
use strand::{read_token, write_text, Sequence};

#[test]
fn test_read_successive_tokens() {
    let mut input = Cursor::new("first second\n\tthird");
    let mut seq = Sequence::new();
    let mut tokens = Vec::new();

    while read_token(&mut input, &mut seq).unwrap() {
        tokens.push(seq.to_string());
    }

    assert_eq!(tokens, vec!["first", "second", "third"]);
    assert!(seq.is_empty());
}

#[test]
fn test_read_token_across_buffer_boundaries() {
    // A 2-byte buffer forces the token to span several fill_buf calls
    let mut input = BufReader::with_capacity(2, Cursor::new("   spanning   tail"));
    let mut seq = s("old");

    assert!(read_token(&mut input, &mut seq).unwrap());
    assert_eq!(seq, s("spanning"));
    assert!(read_token(&mut input, &mut seq).unwrap());
    assert_eq!(seq, s("tail"));
}

#[test]
fn test_write_then_read_round_trip() {
    let original = s("token-42");
    let mut buffer = Vec::new();
    write_text(&original, &mut buffer).unwrap();
    buffer.push(b'\n');

    let mut restored = Sequence::new();
    read_token(&mut Cursor::new(buffer), &mut restored).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn test_write_raw_bytes() {
    let bytes = Sequence::from([0xffu8, b'a', 0x00]);
    let mut out = Vec::new();
    write_text(&bytes, &mut out).unwrap();
    assert_eq!(out, vec![0xff, b'a', 0x00]);
}
