//! Scenario tests for base-10 decoding.
//!
//! Digit registers are built the way a caller builds them from text: bytes in
//! memory order, first character in lane 0, then a broadcast '0' subtracted.

#[path = "../common/mod.rs"]
mod common;

use lanes_core::{decode_base10, parse_eight_digits, parse_sixteen_digits, Swar};
use rand::Rng;

// =============================================================================
// Reference scenario
// =============================================================================

#[test]
fn test_sixteen_byte_lanes_reference_value() {
    let text = Swar::<8, u128>::from_le_bytes(b"1234567898765432");
    let digits = text.wrapping_sub(Swar::broadcast(b'0' as u128));
    assert_eq!(digits.at(0), 1);
    assert_eq!(digits.at(15), 2);

    let value = decode_base10(digits) as u64;
    assert_eq!(value, 1_234_567_898_765_432);
    assert_eq!(value, 12_345_678 * 100_000_000 + 98_765_432);
}

#[test]
fn test_ascii_entry_points_agree_with_generic_decode() {
    assert_eq!(parse_sixteen_digits(b"1234567898765432"), 1_234_567_898_765_432);
    assert_eq!(parse_eight_digits(b"12345678"), 12_345_678);
    assert_eq!(parse_eight_digits(b"98765432"), 98_765_432);
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn test_all_zero_digits() {
    assert_eq!(decode_base10(Swar::<8, u128>::ZERO), 0);
    assert_eq!(decode_base10(Swar::<4, u64>::ZERO), 0);
    assert_eq!(decode_base10(Swar::<8, u32>::ZERO), 0);
    assert_eq!(parse_sixteen_digits(b"0000000000000000"), 0);
}

#[test]
fn test_single_nonzero_digit_at_each_position() {
    // Decimal position k counts from the least significant (last) lane.
    for lane in 0..16u32 {
        for d in 1..=9u128 {
            let digits = Swar::<8, u128>::ZERO.with_lane(lane, d);
            let k = 15 - lane;
            assert_eq!(decode_base10(digits), d * 10u128.pow(k), "digit {d} in lane {lane}");
        }
    }
}

#[test]
fn test_all_nines_every_geometry() {
    assert_eq!(decode_base10(Swar::<4, u8>::broadcast(9)), 99);
    assert_eq!(decode_base10(Swar::<4, u16>::broadcast(9)), 9_999);
    assert_eq!(decode_base10(Swar::<8, u16>::broadcast(9)), 99);
    assert_eq!(decode_base10(Swar::<4, u32>::broadcast(9)), 99_999_999);
    assert_eq!(decode_base10(Swar::<8, u64>::broadcast(9)), 99_999_999);
    assert_eq!(decode_base10(Swar::<4, u64>::broadcast(9)), 9_999_999_999_999_999);
    assert_eq!(decode_base10(Swar::<16, u64>::broadcast(9)), 9_999);
    assert_eq!(decode_base10(Swar::<8, u128>::broadcast(9)), 9_999_999_999_999_999);
}

#[test]
fn test_single_lane_registers() {
    assert_eq!(decode_base10(Swar::<8, u8>::new(5)), 5);
    assert_eq!(decode_base10(Swar::<64, u64>::new(9)), 9);
}

#[test]
fn test_short_number_zero_padded_in_front() {
    let mut text = *b"0000000000000000";
    text[13..].copy_from_slice(b"427");
    assert_eq!(parse_sixteen_digits(&text), 427);
}

// =============================================================================
// Random round trips
// =============================================================================

#[test]
fn test_round_trip_random_values() {
    let mut rng = common::seeded_rng(2024);
    for _ in 0..10_000 {
        let value = rng.gen_range(0..10_000_000_000_000_000u64);
        let digits = common::digit_register::<8, u128>(value as u128);
        assert_eq!(decode_base10(digits), value as u128);
        assert_eq!(parse_sixteen_digits(&common::sixteen_ascii(value)), value);
    }
}

#[test]
fn test_round_trip_each_digit_count() {
    let mut rng = common::seeded_rng(7);
    for digits in 1..=16u32 {
        let lo = if digits == 1 { 0 } else { 10u64.pow(digits - 1) };
        let hi = 10u64.pow(digits);
        for _ in 0..100 {
            let value = rng.gen_range(lo..hi);
            assert_eq!(parse_sixteen_digits(&common::sixteen_ascii(value)), value);
        }
    }
}
