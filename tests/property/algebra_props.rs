//! Properties of concatenation and repetition.

use super::common::{byte_sequence, small_alphabet_sequence, to_vec};
use proptest::prelude::*;
use strand::{concat, prepend_element, repeat, Sequence};

proptest! {
    /// Property: concat is associative.
    #[test]
    fn prop_concat_associative(
        a in small_alphabet_sequence(),
        b in small_alphabet_sequence(),
        c in small_alphabet_sequence(),
    ) {
        prop_assert_eq!(
            concat(&concat(&a, &b), &c),
            concat(&a, &concat(&b, &c))
        );
    }

    /// Property: the empty sequence is a two-sided identity for concat.
    #[test]
    fn prop_concat_identity(a in byte_sequence()) {
        let empty = Sequence::new();
        prop_assert_eq!(&concat(&a, &empty), &a);
        prop_assert_eq!(&concat(&empty, &a), &a);
    }

    /// Property: concat is std's slice concatenation.
    #[test]
    fn prop_concat_matches_std(a in byte_sequence(), b in byte_sequence()) {
        let joined = &a + &b;
        prop_assert_eq!(to_vec(&joined), [to_vec(&a), to_vec(&b)].concat());
    }

    /// Property: prepend puts the element first and shifts everything else.
    #[test]
    fn prop_prepend(a in byte_sequence(), element in any::<u8>()) {
        let result = prepend_element(element, &a);
        prop_assert_eq!(result.len(), a.len() + 1);
        prop_assert_eq!(result.at(0), Ok(&element));
        prop_assert_eq!(result.slice(1, a.len()).unwrap(), a);
    }

    /// Property: non-positive repetition is always empty.
    #[test]
    fn prop_repeat_non_positive(a in byte_sequence(), times in -100i64..=0) {
        prop_assert!(repeat(&a, times).is_empty());
    }

    /// Property: repeat(a, t)[k * len + i] == a[i].
    #[test]
    fn prop_repeat_tiles(a in small_alphabet_sequence(), times in 1i64..6) {
        let result = repeat(&a, times);
        let tiles = times as usize;
        prop_assert_eq!(result.len(), a.len() * tiles);

        for k in 0..tiles {
            for i in 0..a.len() {
                prop_assert_eq!(result.at(k * a.len() + i), a.at(i));
            }
        }
        prop_assert_eq!(to_vec(&result), to_vec(&a).repeat(tiles));
    }
}
