//! Tests for per-lane bit statistics and precision changes.

#[path = "../common/mod.rs"]
mod common;

use lanes_core::Swar;
use rand::Rng;

// =============================================================================
// lane_popcount
// =============================================================================

#[test]
fn test_lane_popcount_bytes() {
    let s = Swar::<8, u64>::from_lanes(&[0, 1, 3, 0x0F, 0x55, 0xFE, 0xFF, 0x80]);
    assert_eq!(s.lane_popcount(), Swar::from_lanes(&[0, 1, 2, 4, 4, 7, 8, 1]));
}

#[test]
fn test_lane_popcount_full_lane_fits() {
    // A full 2^k-bit lane counts to 2^k, which always fits in the lane.
    assert_eq!(Swar::<2, u8>::ALL_ONES.lane_popcount().value(), 0b1010_1010);
    assert_eq!(Swar::<64, u128>::ALL_ONES.lane_popcount(), Swar::from_lanes(&[64, 64]));
}

#[test]
fn test_lane_popcount_single_bit_lanes_is_identity() {
    let s = Swar::<1, u16>::new(0xA5C3);
    assert_eq!(s.lane_popcount(), s);
}

#[test]
fn test_lane_popcount_matches_reference() {
    let mut rng = common::seeded_rng(7);
    for _ in 0..500 {
        let x: u128 = rng.gen();
        let counts = Swar::<16, u128>::new(x).lane_popcount();
        for lane in 0..8 {
            let expected = common::ref_lane(x, 16, lane).count_ones() as u128;
            assert_eq!(counts.at(lane), expected);
        }
    }
}

// =============================================================================
// lane_floor_log2
// =============================================================================

#[test]
fn test_lane_floor_log2_nibbles() {
    let s = Swar::<4, u32>::from_lanes(&[1, 2, 3, 4, 7, 8, 15, 0]);
    assert_eq!(s.lane_floor_log2(), Swar::from_lanes(&[0, 1, 1, 2, 2, 3, 3, 0xF]));
}

#[test]
fn test_lane_floor_log2_matches_reference() {
    let mut rng = common::seeded_rng(99);
    for _ in 0..500 {
        let x: u64 = rng.gen();
        let logs = Swar::<8, u64>::new(x).lane_floor_log2();
        for lane in 0..8 {
            let v = common::ref_lane(x as u128, 8, lane) as u64;
            let expected = if v == 0 { 0xFF } else { 63 - v.leading_zeros() as u64 };
            assert_eq!(logs.at(lane), expected, "x={x:#x} lane={lane}");
        }
    }
}

// =============================================================================
// widen / narrow
// =============================================================================

#[test]
fn test_widen_splits_even_and_odd_lanes() {
    let s = Swar::<8, u64>::from_lanes(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let pair = s.widen::<16>();
    assert_eq!(pair.even, Swar::from_lanes(&[1, 3, 5, 7]));
    assert_eq!(pair.odd, Swar::from_lanes(&[2, 4, 6, 8]));
}

#[test]
fn test_narrow_restores_original() {
    let s = Swar::<16, u128>::new(0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210);
    assert_eq!(s.widen::<32>().narrow::<16>(), s);
}

#[test]
fn test_widened_products_fit() {
    // 200 * 3 overflows a byte lane but fits a 16-bit lane.
    let s = Swar::<8, u32>::from_lanes(&[200, 100, 50, 25]);
    let pair = s.widen::<16>();
    assert_eq!(pair.even.mul_scalar(3), Swar::from_lanes(&[600, 150]));
    assert_eq!(pair.odd.mul_scalar(3), Swar::from_lanes(&[300, 75]));
}

#[test]
fn test_widened_pair_debug_lists_both_halves() {
    let pair = Swar::<4, u16>::new(0x4321).widen::<8>();
    assert_eq!(
        format!("{:?}", pair),
        "SwarPair { even: Swar<8, u16>[0x1, 0x3], odd: Swar<8, u16>[0x2, 0x4] }"
    );
}
