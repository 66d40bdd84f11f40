//! Properties of the core container: fill, access, slicing, append, transforms.

use super::common::{assert_bounds, byte_sequence, to_vec};
use proptest::prelude::*;
use strand::{append_element, Sequence, StringError, ToUpper};

proptest! {
    /// Property: filled(n, v) has n elements, all equal to v.
    #[test]
    fn prop_filled_has_n_copies(n in 0usize..64, value in any::<u8>()) {
        let seq = Sequence::filled(n, value);
        assert_bounds(&seq, n);
        for i in 0..n {
            prop_assert_eq!(seq.at(i), Ok(&value));
        }
    }

    /// Property: slicing at the end is always empty, past the end always fails.
    #[test]
    fn prop_slice_start_boundary(seq in byte_sequence(), len in 0usize..64, past in 1usize..16) {
        let at_end = seq.slice(seq.len(), len).unwrap();
        prop_assert!(at_end.is_empty());

        let start = seq.len() + past;
        prop_assert_eq!(
            seq.slice(start, len),
            Err(StringError::OutOfRange { index: start })
        );
    }

    /// Property: slice(start, len) matches std slicing with a clamped end.
    #[test]
    fn prop_slice_matches_std(seq in byte_sequence(), start in 0usize..40, len in 0usize..40) {
        let reference = to_vec(&seq);
        match seq.slice(start, len) {
            Ok(sliced) => {
                prop_assert!(start <= reference.len());
                let end = (start + len).min(reference.len());
                prop_assert_eq!(to_vec(&sliced), reference[start..end].to_vec());
            }
            Err(err) => {
                prop_assert!(start > reference.len());
                prop_assert_eq!(err.index(), Some(start));
            }
        }
    }

    /// Property: append_element grows by one, ends with the element, and
    /// leaves its input alone.
    #[test]
    fn prop_append_element(seq in byte_sequence(), element in any::<u8>()) {
        let before = seq.clone();
        let grown = append_element(&seq, element);

        prop_assert_eq!(grown.len(), seq.len() + 1);
        prop_assert_eq!(grown.at(seq.len()), Ok(&element));
        prop_assert_eq!(seq, before);
    }

    /// Property: mapped and apply_in_place agree, and mapped is non-destructive.
    #[test]
    fn prop_mapped_matches_in_place(seq in byte_sequence()) {
        let original = seq.clone();
        let copy = seq.mapped(&ToUpper);

        let mut in_place = seq.clone();
        in_place.apply_in_place(&ToUpper);

        prop_assert_eq!(&copy, &in_place);
        prop_assert_eq!(&seq, &original);
        prop_assert_eq!(to_vec(&copy), to_vec(&original).to_ascii_uppercase());
    }

    /// Property: widening then narrowing a byte sequence is lossless.
    #[test]
    fn prop_cast_widen_narrow(seq in byte_sequence()) {
        let wide: Sequence<u32> = seq.cast();
        let back: Sequence<u8> = wide.cast();
        prop_assert_eq!(back, seq);
    }
}
