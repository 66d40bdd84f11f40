//! The end-to-end walkthrough a caller would drive: read, transform, slice,
//! concatenate, repeat, index.

use super::common::s;
use strand::{concat, repeat, Sequence, StringError, ToUpper, Transformer};

#[test]
fn test_upper_case_scenario() {
    let mut word = s("abc");
    word.apply_in_place(&ToUpper);
    assert_eq!(word, s("ABC"));
    assert_eq!(word.to_string(), "ABC");
}

#[test]
fn test_slice_scenario() {
    let word = s("abc");
    assert_eq!(word.slice(1, 2), Ok(s("bc")));
}

#[test]
fn test_concat_and_repeat_scenario() {
    assert_eq!(concat(&s("ab"), &s("cd")), s("abcd"));
    assert_eq!(repeat(&s("xy"), 3), s("xyxyxy"));
}

#[test]
fn test_out_of_range_scenario() {
    let word = s("abc");
    let err = word.at(5).unwrap_err();
    assert_eq!(err, StringError::OutOfRange { index: 5 });
    assert_eq!(err.to_string(), "String error: Index out of range: 5");
}

#[test]
fn test_runtime_selected_transformer() {
    let transformers: Vec<Box<dyn Transformer<u8>>> = vec![
        Box::new(ToUpper),
        Box::new(|b: &u8| if *b == b'B' { b'_' } else { *b }),
    ];

    let mut word = s("abc");
    for transformer in &transformers {
        word.apply_in_place(transformer.as_ref());
    }
    assert_eq!(word, s("A_C"));
}

#[test]
fn test_errors_propagate_with_question_mark() {
    fn middle(seq: &Sequence<u8>) -> strand::Result<u8> {
        let index = seq.len() / 2;
        Ok(*seq.at(index)?)
    }

    assert_eq!(middle(&s("abc")), Ok(b'b'));
    assert_eq!(
        middle(&Sequence::new()),
        Err(StringError::OutOfRange { index: 0 })
    );
}
