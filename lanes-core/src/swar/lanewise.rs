//! Per-lane bit statistics.
//!
//! Both operations work in `log2(W)` rounds of whole-register shifts and masks,
//! so they require a power-of-two lane width. That is always the case for a
//! valid geometry, since `W` divides a power-of-two register width; the
//! assertion only documents the dependency.

use crate::intrinsics::log::floor_log2;
use crate::register::LaneMasks;
use crate::swar::lanes::Swar;

impl<const W: u32, R: LaneMasks<W>> Swar<W, R> {
    /// Number of set bits in each lane.
    ///
    /// Adjacent bit groups are summed pairwise: pairs, then nibbles, then
    /// bytes, until groups reach the lane width.
    ///
    /// ```
    /// use lanes_core::Swar;
    ///
    /// let s = Swar::<4, u16>::new(0xF754);
    /// assert_eq!(s.lane_popcount().value(), 0x4321);
    /// ```
    #[inline]
    pub fn lane_popcount(self) -> Self {
        const { assert!(W.is_power_of_two(), "lane popcount needs a power-of-two lane width") };
        let mut x = self.0;
        for level in 0..floor_log2(W as u64) {
            let keep = R::HALF_MASKS[level as usize];
            x = (x & keep).wrapping_add((x >> (1u32 << level)) & keep);
        }
        Self(x)
    }

    /// Floor of the base-2 logarithm of each lane.
    ///
    /// Lanes holding zero come back as all ones (`2^W - 1`), a value no
    /// non-zero lane can produce.
    ///
    /// ```
    /// use lanes_core::Swar;
    ///
    /// let s = Swar::<8, u64>::new(0x8040_2010_0804_0201);
    /// assert_eq!(s.lane_floor_log2().value(), 0x0706_0504_0302_0100);
    /// ```
    pub fn lane_floor_log2(self) -> Self {
        const { assert!(W.is_power_of_two(), "lane logarithm needs a power-of-two lane width") };
        // Smear the highest set bit of each lane downward. The isolation mask
        // covers the top `group` bits of each lane, which are the bits a right
        // shift would pull in from the lane above.
        let mut smeared = self.0;
        let mut isolation = <R as LaneMasks<W>>::MOST_SIGNIFICANT_BIT;
        let mut group = 1;
        while group < W {
            smeared = smeared | ((smeared >> group) & !isolation);
            isolation = isolation | (isolation >> group);
            group <<= 1;
        }
        Self(smeared)
            .lane_popcount()
            .wrapping_sub(Self::LEAST_SIGNIFICANT_BIT)
    }
}
