use std::cmp::Ordering;

use bwt_core::kernels::{single_byte_rle, single_digit_rle};
use bwt_core::{BurrowsWheeler, BwtError, SentinelComparator, DEFAULT_SENTINEL};
use proptest::prelude::*;

/// Strings over a small alphabet, so rotations share long prefixes.
fn small_alphabet_text() -> impl Strategy<Value = String> {
    "[ab\\n]{0,24}"
}

/// Arbitrary text that never contains the default sentinel.
fn sentinel_free_text() -> impl Strategy<Value = String> {
    "[^\\x07]{0,16}"
}

proptest! {
    #[test]
    fn test_round_trip_small_alphabet(input in small_alphabet_text()) {
        let bwt = BurrowsWheeler::new();
        let encoded = bwt.transform(&input).unwrap();
        prop_assert_eq!(encoded.chars().count(), input.chars().count() + 1);
        prop_assert_eq!(bwt.inverse(&encoded).unwrap(), input);
    }

    #[test]
    fn test_round_trip_arbitrary_text(input in sentinel_free_text()) {
        let bwt = BurrowsWheeler::new();
        let encoded = bwt.transform(&input).unwrap();
        prop_assert_eq!(bwt.inverse(&encoded).unwrap(), input);
    }

    #[test]
    fn test_transform_is_a_permutation(input in small_alphabet_text()) {
        let encoded = BurrowsWheeler::new().transform(&input).unwrap();
        let mut expected: Vec<char> = input.chars().chain(std::iter::once(DEFAULT_SENTINEL)).collect();
        let mut actual: Vec<char> = encoded.chars().collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_comparator_antisymmetric(a in "[ab\\x07]{0,6}", b in "[ab\\x07]{0,6}") {
        let cmp = SentinelComparator::new(DEFAULT_SENTINEL);
        prop_assert_eq!(cmp.compare(&a, &b), cmp.compare(&b, &a).reverse());
        prop_assert_eq!(cmp.compare(&a, &b) == Ordering::Equal, cmp.equals(&a, &b));
        if cmp.equals(&a, &b) {
            prop_assert_eq!(cmp.hash_one(&a), cmp.hash_one(&b));
        }
    }

    #[test]
    fn test_comparator_transitive(
        a in "[ab\\x07]{0,5}",
        b in "[ab\\x07]{0,5}",
        c in "[ab\\x07]{0,5}",
    ) {
        let cmp = SentinelComparator::new(DEFAULT_SENTINEL);
        if cmp.compare(&a, &b) != Ordering::Greater && cmp.compare(&b, &c) != Ordering::Greater {
            prop_assert_ne!(cmp.compare(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn test_sentinel_wins_first_difference(prefix in "[ab]{0,4}", x in "[ab]", tail_a in "[ab]{0,3}", tail_b in "[ab]{0,3}") {
        let cmp = SentinelComparator::new(DEFAULT_SENTINEL);
        let with_sentinel = format!("{}\u{7}{}", prefix, tail_a);
        let without = format!("{}{}{}", prefix, x, tail_b);
        prop_assert_eq!(cmp.compare(&with_sentinel, &without), Ordering::Less);
    }

    #[test]
    fn test_resort_is_idempotent(mut items in prop::collection::vec("[ab\\x07]{0,5}", 0..12)) {
        let cmp = SentinelComparator::new(DEFAULT_SENTINEL);
        cmp.sort(&mut items);
        let once = items.clone();
        cmp.sort(&mut items);
        prop_assert_eq!(items, once);
    }

    #[test]
    fn test_inverse_rejects_sentinel_free_encodings(encoded in "[abc]{1,12}") {
        let result = BurrowsWheeler::new().inverse(&encoded);
        prop_assert!(matches!(result, Err(BwtError::CorruptInput(_))));
    }

    #[test]
    fn test_inverse_of_single_sentinel_string_is_exact_or_corrupt(
        body in "[ab]{0,6}",
        at in 0usize..=6,
    ) {
        let bwt = BurrowsWheeler::new();
        let mut chars: Vec<char> = body.chars().collect();
        chars.insert(at.min(chars.len()), DEFAULT_SENTINEL);
        let encoded: String = chars.into_iter().collect();

        match bwt.inverse(&encoded) {
            Ok(decoded) => {
                prop_assert!(!decoded.contains(DEFAULT_SENTINEL));
                prop_assert_eq!(bwt.transform(&decoded).unwrap(), encoded);
            }
            Err(err) => prop_assert!(matches!(err, BwtError::CorruptInput(_))),
        }
    }

    #[test]
    fn test_single_digit_rle_round_trip(input in "[a-c0-9]{0,40}") {
        let encoded = single_digit_rle::encode(&input);
        prop_assert_eq!(encoded.chars().count() % 2, 0);
        prop_assert_eq!(single_digit_rle::decode(&encoded).unwrap(), input);
    }

    #[test]
    fn test_single_byte_rle_round_trip(input in "\\PC{0,40}") {
        let mut encoded = Vec::new();
        single_byte_rle::encode(&input, &mut encoded);
        prop_assert_eq!(encoded.len() % single_byte_rle::PACKET_SIZE, 0);
        prop_assert_eq!(single_byte_rle::decode(&encoded).unwrap(), input);
    }
}

#[test]
fn test_rotation_set_has_no_duplicates() {
    use hashbrown::HashSet;
    use bwt_core::transform::rotation::{generate_rotations, sort_rotations};

    let cmp = SentinelComparator::new(DEFAULT_SENTINEL);
    let terminated: Vec<char> = "abracadabra\u{7}".chars().collect();
    let mut rotations = generate_rotations(&terminated);
    sort_rotations(&mut rotations, &cmp);

    let strings: Vec<String> = rotations.iter().map(|r| r.iter().collect()).collect();
    let distinct: HashSet<u64> = strings.iter().map(|s| cmp.hash_one(s)).collect();
    assert_eq!(distinct.len(), terminated.len());
    assert!(strings
        .windows(2)
        .all(|pair| cmp.compare(&pair[0], &pair[1]) == Ordering::Less));
}
