//! Tests for lane comparisons and hit-mask queries.

#[path = "../common/mod.rs"]
mod common;

use lanes_core::{BooleanSwar, Swar};
use rand::Rng;

// =============================================================================
// Predicates
// =============================================================================

#[test]
fn test_equals_and_not_equals() {
    let a = Swar::<8, u64>::from_le_bytes(b"abcdefgh");
    let b = Swar::<8, u64>::from_le_bytes(b"abXdeYgh");
    assert_eq!(a.not_equals(b).iter().collect::<Vec<_>>(), [2, 5]);
    assert_eq!(a.equals(b).count(), 6);
}

#[test]
fn test_equals_guard_bit_only_difference() {
    // Lanes differ only in their top bit.
    let a = Swar::<4, u16>::new(0x8888);
    let b = Swar::<4, u16>::new(0x0808);
    assert_eq!(a.equals(b).iter().collect::<Vec<_>>(), [0, 2]);
}

#[test]
fn test_ordering_predicates() {
    let a = Swar::<8, u32>::from_lanes(&[1, 5, 200, 7]);
    let b = Swar::<8, u32>::from_lanes(&[2, 5, 100, 7]);
    assert_eq!(a.less_than(b).iter().collect::<Vec<_>>(), [0]);
    assert_eq!(a.less_equal(b).iter().collect::<Vec<_>>(), [0, 1, 3]);
    assert_eq!(a.greater_than(b).iter().collect::<Vec<_>>(), [2]);
    assert_eq!(a.greater_equal(b).iter().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn test_less_than_extremes() {
    let zero = Swar::<16, u64>::ZERO;
    let max = Swar::<16, u64>::ALL_ONES;
    assert!(zero.less_than(max).all());
    assert!(max.less_than(zero).none());
    assert!(max.less_than(max).none());
}

#[test]
fn test_comparisons_match_reference_on_random_registers() {
    let mut rng = common::seeded_rng(42);
    for _ in 0..1000 {
        let a: u32 = rng.gen();
        // Bias toward equal lanes so equality hits are common.
        let b: u32 = a ^ (rng.gen::<u32>() & rng.gen::<u32>() & rng.gen::<u32>());
        let (sa, sb) = (Swar::<4, u32>::new(a), Swar::<4, u32>::new(b));
        let (eq, lt) = (sa.equals(sb), sa.less_than(sb));
        for lane in 0..8 {
            let x = common::ref_lane(a as u128, 4, lane);
            let y = common::ref_lane(b as u128, 4, lane);
            assert_eq!(eq.get(lane), x == y, "a={a:#x} b={b:#x} lane={lane}");
            assert_eq!(lt.get(lane), x < y, "a={a:#x} b={b:#x} lane={lane}");
        }
    }
}

#[test]
fn test_nonzero_lanes() {
    let s = Swar::<8, u32>::from_lanes(&[0, 3, 0, 0x80]);
    assert_eq!(s.nonzero_lanes().iter().collect::<Vec<_>>(), [1, 3]);
}

// =============================================================================
// Horizontal queries
// =============================================================================

#[test]
fn test_find_first_set_lane_empty_mask() {
    assert_eq!(BooleanSwar::<8, u64>::NONE.first(), None);
    assert_eq!(BooleanSwar::<8, u64>::NONE.last(), None);
    assert_eq!(BooleanSwar::<8, u64>::NONE.count(), 0);
}

#[test]
fn test_find_first_set_lane_single_bit() {
    for lane in 0..16 {
        let hit = BooleanSwar::<8, u128>::from_guard_bits(1u128 << (lane * 8 + 7));
        assert_eq!(hit.first(), Some(lane));
        assert_eq!(hit.last(), Some(lane));
        assert_eq!(hit.count(), 1);
    }
}

#[test]
fn test_first_last_and_count() {
    let hits = BooleanSwar::<4, u32>::from_bools(&[false, true, false, true, true]);
    assert_eq!(hits.first(), Some(1));
    assert_eq!(hits.last(), Some(4));
    assert_eq!(hits.count(), 3);
    assert_eq!(hits.clear_first().first(), Some(3));
}

#[test]
fn test_from_guard_bits_discards_scratch() {
    let hits = BooleanSwar::<8, u16>::from_guard_bits(0xFF7F);
    assert_eq!(hits.value(), 0x8000);
}

#[test]
fn test_first_zero_lane() {
    let s = Swar::<8, u64>::from_le_bytes(b"abc\0efgh");
    assert_eq!(s.first_zero_lane(), Some(3));
    assert_eq!(Swar::<8, u64>::ALL_ONES.first_zero_lane(), None);
    assert_eq!(Swar::<8, u64>::ZERO.first_zero_lane(), Some(0));
}

#[test]
fn test_first_matching_lane() {
    let haystack = Swar::<8, u64>::from_le_bytes(b"1234.678");
    let dots = Swar::<8, u64>::broadcast(b'.' as u64);
    assert_eq!(haystack.first_matching_lane(dots), Some(4));
}

// =============================================================================
// Hit-mask algebra
// =============================================================================

#[test]
fn test_boolean_algebra_stays_on_guard_bits() {
    let a = BooleanSwar::<8, u32>::from_bools(&[true, true, false, false]);
    let b = BooleanSwar::<8, u32>::from_bools(&[true, false, true, false]);
    assert_eq!((a & b).iter().collect::<Vec<_>>(), [0]);
    assert_eq!((a | b).iter().collect::<Vec<_>>(), [0, 1, 2]);
    assert_eq!((a ^ b).iter().collect::<Vec<_>>(), [1, 2]);
    assert_eq!((!a).iter().collect::<Vec<_>>(), [2, 3]);
    assert_eq!((!a).value() & 0x7F7F_7F7F, 0);
}

#[test]
fn test_select_blends_lanes() {
    let a = Swar::<8, u32>::from_lanes(&[1, 2, 3, 4]);
    let b = Swar::<8, u32>::from_lanes(&[9, 9, 9, 9]);
    let pick_a = a.less_than(Swar::broadcast(3));
    assert_eq!(pick_a.select(a, b), Swar::from_lanes(&[1, 2, 9, 9]));
}

#[test]
fn test_lane_index_iterator_is_exact() {
    let hits = BooleanSwar::<16, u64>::ALL;
    let iter = hits.into_iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.collect::<Vec<_>>(), [0, 1, 2, 3]);
}
