//! Property-based tests for base-10 decoding.

#[path = "../common/mod.rs"]
mod common;

use lanes_core::{decode_base10, parse_eight_digits, parse_sixteen_digits, Swar};
use proptest::prelude::*;

/// Naive Horner evaluation, lane 0 first.
fn horner(digits: &[u8]) -> u128 {
    digits.iter().fold(0u128, |acc, &d| acc * 10 + d as u128)
}

proptest! {
    #[test]
    fn prop_round_trip_sixteen_digits(value in 0u64..10_000_000_000_000_000) {
        let digits = common::digit_register::<8, u128>(value as u128);
        prop_assert_eq!(decode_base10(digits), value as u128);
    }

    #[test]
    fn prop_round_trip_thirty_two_nibbles(value in any::<u64>(), high in 0u64..10_000_000_000_000) {
        // Up to 32 digits: combine two u64 halves into one u128 below 10^32.
        let value = high as u128 * 10u128.pow(19) + value as u128 % 10u128.pow(19);
        let digits = common::digit_register::<4, u128>(value);
        prop_assert_eq!(decode_base10(digits), value);
    }

    #[test]
    fn prop_round_trip_eight_nibbles(value in 0u32..100_000_000) {
        let digits = common::digit_register::<4, u32>(value as u128);
        prop_assert_eq!(decode_base10(digits), value);
    }

    #[test]
    fn prop_decode_matches_horner(digits in proptest::collection::vec(0u8..=9, 16)) {
        let lanes: Vec<u128> = digits.iter().map(|&d| d as u128).collect();
        let register = Swar::<8, u128>::from_lanes(&lanes);
        prop_assert_eq!(decode_base10(register), horner(&digits));
    }

    #[test]
    fn prop_parse_sixteen_matches_std(text in "[0-9]{16}") {
        let bytes: [u8; 16] = text.as_bytes().try_into().unwrap();
        prop_assert_eq!(parse_sixteen_digits(&bytes), text.parse::<u64>().unwrap());
    }

    #[test]
    fn prop_parse_eight_matches_std(text in "[0-9]{8}") {
        let bytes: [u8; 8] = text.as_bytes().try_into().unwrap();
        prop_assert_eq!(parse_eight_digits(&bytes), text.parse::<u32>().unwrap());
    }
}
