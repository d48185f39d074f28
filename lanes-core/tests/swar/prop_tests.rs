//! Property-based tests for the SWAR core.
//!
//! Every lane-wise operation is checked against the same operation applied to
//! each lane separately, for several lane widths and register types.

#[path = "../common/mod.rs"]
mod common;

use lanes_core::{LaneMasks, Swar};
use proptest::prelude::*;

/// Checks one binary lane-wise operation against its scalar model on every lane.
fn check_lanewise<const W: u32, R: LaneMasks<W>>(
    a: R,
    b: R,
    op: impl Fn(Swar<W, R>, Swar<W, R>) -> Swar<W, R>,
    model: impl Fn(u128, u128) -> u128,
) -> Result<(), TestCaseError> {
    let lane_mask = (1u128 << W) - 1;
    let result = op(Swar::new(a), Swar::new(b)).value().to_u128();
    for lane in 0..Swar::<W, R>::LANES {
        let x = common::ref_lane(a.to_u128(), W, lane);
        let y = common::ref_lane(b.to_u128(), W, lane);
        prop_assert_eq!(
            common::ref_lane(result, W, lane),
            model(x, y) & lane_mask,
            "lane {} of {:#x} and {:#x}",
            lane,
            a.to_u128(),
            b.to_u128()
        );
    }
    Ok(())
}

/// Checks one comparison against its scalar predicate on every lane.
fn check_predicate<const W: u32, R: LaneMasks<W>>(
    a: R,
    b: R,
    predicate: impl Fn(Swar<W, R>, Swar<W, R>) -> lanes_core::BooleanSwar<W, R>,
    model: impl Fn(u128, u128) -> bool,
) -> Result<(), TestCaseError> {
    let hits = predicate(Swar::new(a), Swar::new(b));
    prop_assert_eq!(
        hits.value() & !<R as LaneMasks<W>>::MOST_SIGNIFICANT_BIT,
        R::ZERO,
        "hit mask must only use guard bits"
    );
    for lane in 0..Swar::<W, R>::LANES {
        let x = common::ref_lane(a.to_u128(), W, lane);
        let y = common::ref_lane(b.to_u128(), W, lane);
        prop_assert_eq!(hits.get(lane), model(x, y), "lane {}", lane);
    }
    Ok(())
}

proptest! {
    // =========================================================================
    // Carry isolation
    // =========================================================================

    #[test]
    fn prop_add_is_lanewise_u64_bytes(a in any::<u64>(), b in any::<u64>()) {
        check_lanewise::<8, u64>(a, b, |x, y| x.wrapping_add(y), |x, y| x + y)?;
    }

    #[test]
    fn prop_add_is_lanewise_u32_nibbles(a in any::<u32>(), b in any::<u32>()) {
        check_lanewise::<4, u32>(a, b, |x, y| x.wrapping_add(y), |x, y| x + y)?;
    }

    #[test]
    fn prop_add_is_lanewise_u128_words(a in any::<u128>(), b in any::<u128>()) {
        check_lanewise::<16, u128>(a, b, |x, y| x.wrapping_add(y), |x, y| x + y)?;
    }

    #[test]
    fn prop_add_is_lanewise_u16_pairs(a in any::<u16>(), b in any::<u16>()) {
        check_lanewise::<2, u16>(a, b, |x, y| x.wrapping_add(y), |x, y| x + y)?;
    }

    #[test]
    fn prop_sub_is_lanewise_u64_bytes(a in any::<u64>(), b in any::<u64>()) {
        check_lanewise::<8, u64>(a, b, |x, y| x.wrapping_sub(y), |x, y| x.wrapping_sub(y))?;
    }

    #[test]
    fn prop_sub_is_lanewise_u8_single_bits(a in any::<u8>(), b in any::<u8>()) {
        check_lanewise::<1, u8>(a, b, |x, y| x.wrapping_sub(y), |x, y| x.wrapping_sub(y))?;
    }

    #[test]
    fn prop_saturating_add_is_lanewise(a in any::<u32>(), b in any::<u32>()) {
        check_lanewise::<8, u32>(a, b, |x, y| x.saturating_add(y), |x, y| (x + y).min(0xFF))?;
    }

    #[test]
    fn prop_neighbour_unaffected_by_overflow(lane in 0u32..7, x in any::<u8>(), rest in any::<u64>()) {
        // Same register except lane `lane`; lane `lane + 1` must not notice.
        let base = Swar::<8, u64>::new(rest);
        let a = base.with_lane(lane, x as u64);
        let b = Swar::<8, u64>::new(rest.rotate_left(17));
        let with_x = a.wrapping_add(b);
        let with_zero = base.with_lane(lane, 0).wrapping_add(b);
        prop_assert_eq!(with_x.at(lane + 1), with_zero.at(lane + 1));
    }

    // =========================================================================
    // Comparisons
    // =========================================================================

    #[test]
    fn prop_equals_is_lanewise(a in any::<u64>(), mask in any::<u64>()) {
        // Flip only some bits so that equal lanes actually occur.
        let b = a ^ (mask & 0x0F00_F000_00FF_0000);
        check_predicate::<8, u64>(a, b, |x, y| x.equals(y), |x, y| x == y)?;
        check_predicate::<4, u64>(a, b, |x, y| x.equals(y), |x, y| x == y)?;
    }

    #[test]
    fn prop_less_than_is_lanewise(a in any::<u64>(), b in any::<u64>()) {
        check_predicate::<8, u64>(a, b, |x, y| x.less_than(y), |x, y| x < y)?;
        check_predicate::<16, u64>(a, b, |x, y| x.less_than(y), |x, y| x < y)?;
        check_predicate::<2, u64>(a, b, |x, y| x.less_than(y), |x, y| x < y)?;
    }

    #[test]
    fn prop_derived_orderings(a in any::<u32>(), b in any::<u32>()) {
        check_predicate::<8, u32>(a, b, |x, y| x.greater_equal(y), |x, y| x >= y)?;
        check_predicate::<8, u32>(a, b, |x, y| x.greater_than(y), |x, y| x > y)?;
        check_predicate::<8, u32>(a, b, |x, y| x.less_equal(y), |x, y| x <= y)?;
    }

    #[test]
    fn prop_first_zero_lane_matches_equals(a in any::<u64>(), zero_at in 0u32..8) {
        let s = Swar::<8, u64>::new(a).clear_lane(zero_at);
        prop_assert_eq!(s.first_zero_lane(), s.equals(Swar::ZERO).first());
    }

    // =========================================================================
    // Broadcast and lane access
    // =========================================================================

    #[test]
    fn prop_runtime_broadcast_law(v in any::<u16>()) {
        let s = Swar::<4, u64>::broadcast(v as u64);
        prop_assert!(s.lanes().all(|lane| lane == (v & 0xF) as u64));
    }

    #[test]
    fn prop_with_lane_then_at(a in any::<u128>(), lane in 0u32..16, v in any::<u8>()) {
        let s = Swar::<8, u128>::new(a).with_lane(lane, v as u128);
        prop_assert_eq!(s.at(lane), v as u128);
        prop_assert_eq!(s.clear_lane(lane), Swar::new(a).clear_lane(lane));
    }

    #[test]
    fn prop_lane_floor_log2_agrees_with_scalar(a in any::<u32>()) {
        let logs = Swar::<16, u32>::new(a).lane_floor_log2();
        for lane in 0..2 {
            let v = (a >> (16 * lane)) & 0xFFFF;
            let expected = if v == 0 { 0xFFFF } else { 31 - v.leading_zeros() };
            prop_assert_eq!(logs.at(lane), expected);
        }
    }
}
