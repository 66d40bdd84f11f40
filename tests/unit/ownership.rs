//! Copy, move and assignment leave every instance independently owned.

use super::common::{assert_bounds, s};
use strand::Sequence;

#[test]
fn test_clone_then_mutate_source() {
    let mut source = s("shared?");
    let copy = source.clone();

    *source.at_mut(0).unwrap() = b'S';
    source.append(b'!');

    assert_eq!(copy, s("shared?"));
    assert_eq!(source, s("Shared?!"));
}

#[test]
fn test_take_then_reuse_source() {
    let mut source = s("abc");
    let moved = source.take();

    assert_bounds(&source, 0);
    assert_bounds(&moved, 3);

    source.append(b'z');
    assert_eq!(source, s("z"));
    assert_eq!(moved, s("abc"));
}

#[test]
fn test_assignment_replaces_storage() {
    let mut target = s("a long previous value");
    let replacement = s("short");

    target.clone_from(&replacement);
    assert_eq!(target, replacement);

    target = Sequence::filled(2, b'-');
    assert_eq!(target, s("--"));
}

#[test]
fn test_slice_is_independent_of_source() {
    let mut source = s("abcdef");
    let part = source.slice(2, 3).unwrap();
    source.clear();

    assert!(source.is_empty());
    assert_eq!(part, s("cde"));
}

#[test]
fn test_repeated_append_builds_in_order() {
    let mut seq = Sequence::new();
    for i in 0..100u32 {
        seq += i;
        assert_bounds(&seq, i as usize + 1);
    }
    assert_eq!(seq, (0..100u32).collect::<Sequence<u32>>());
}

#[test]
fn test_generic_over_non_copy_elements() {
    let words = Sequence::from(vec!["alpha".to_string(), "beta".to_string()]);
    let shouted = words.mapped(&|w: &String| w.to_uppercase());

    assert_eq!(shouted.at(1).map(String::as_str), Ok("BETA"));
    assert_eq!(words.at(0).map(String::as_str), Ok("alpha"));
    assert!(words < shouted.clone() || words > shouted);
}
