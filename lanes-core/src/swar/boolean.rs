//! Hit masks.
//!
//! A [`BooleanSwar`] stores one boolean per lane in the lane's top bit and keeps
//! every other bit clear. Comparisons produce them; horizontal queries consume
//! them with a single bit-count instruction each.

use core::ops::{BitAnd, BitOr, BitXor, Not};

use crate::intrinsics::bits::{blsr, msb_index, popcnt, tzcnt};
use crate::register::{LaneMasks, Register};
use crate::swar::lanes::Swar;

/// One boolean per lane, held in the lane's most significant bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct BooleanSwar<const W: u32, R: Register>(R);

impl<const W: u32, R: LaneMasks<W>> BooleanSwar<W, R> {
    /// No lane set.
    pub const NONE: Self = Self(R::ZERO);
    /// Every lane set.
    pub const ALL: Self = Self(<R as LaneMasks<W>>::MOST_SIGNIFICANT_BIT);

    /// Keeps only the guard bits of `bits`.
    #[inline(always)]
    pub fn from_guard_bits(bits: R) -> Self {
        Self(bits & <R as LaneMasks<W>>::MOST_SIGNIFICANT_BIT)
    }

    /// Builds a mask from per-lane booleans, `flags[0]` going to lane 0.
    pub fn from_bools(flags: &[bool]) -> Self {
        debug_assert!(flags.len() <= Swar::<W, R>::LANES as usize);
        let mut bits = R::ZERO;
        for (lane, &flag) in flags.iter().take(Swar::<W, R>::LANES as usize).enumerate() {
            if flag {
                bits = bits | (R::ONE << (lane as u32 * W + W - 1));
            }
        }
        Self(bits)
    }

    /// The raw register: set lanes have their top bit on, all else is zero.
    #[inline(always)]
    pub fn value(self) -> R {
        self.0
    }

    /// The raw register as a [`Swar`].
    #[inline(always)]
    pub fn as_swar(self) -> Swar<W, R> {
        Swar::new(self.0)
    }

    /// True if any lane is set.
    #[inline(always)]
    pub fn any(self) -> bool {
        self.0 != R::ZERO
    }

    /// True if no lane is set.
    #[inline(always)]
    pub fn none(self) -> bool {
        self.0 == R::ZERO
    }

    /// True if every lane is set.
    #[inline(always)]
    pub fn all(self) -> bool {
        self.0 == <R as LaneMasks<W>>::MOST_SIGNIFICANT_BIT
    }

    /// Number of set lanes.
    #[inline(always)]
    pub fn count(self) -> u32 {
        popcnt(self.0)
    }

    /// Whether `lane` is set.
    #[inline(always)]
    pub fn get(self, lane: u32) -> bool {
        debug_assert!(lane < Swar::<W, R>::LANES);
        (self.0 >> (lane * W + W - 1)) & R::ONE == R::ONE
    }

    /// Lowest set lane, or `None`.
    #[inline(always)]
    pub fn first(self) -> Option<u32> {
        if self.0 == R::ZERO {
            None
        } else {
            Some(tzcnt(self.0) / W)
        }
    }

    /// Highest set lane, or `None`.
    #[inline(always)]
    pub fn last(self) -> Option<u32> {
        msb_index(self.0).map(|bit| bit / W)
    }

    /// Clears the lowest set lane.
    #[inline(always)]
    pub fn clear_first(self) -> Self {
        Self(blsr(self.0))
    }

    /// Iterates the indices of set lanes in ascending order.
    #[inline]
    pub fn iter(self) -> LaneIndices<W, R> {
        LaneIndices { bits: self.0 }
    }

    /// Expands each set lane to all ones and leaves unset lanes zero.
    ///
    /// `0b1000_0000` with 4-bit lanes becomes `0b1111_0000`.
    #[inline(always)]
    pub fn to_lane_mask(self) -> Swar<W, R> {
        // 10..0 - 00..1 = 01..1, then put the guard bit back.
        let below = self.0.wrapping_sub(self.0 >> (W - 1));
        Swar::new(below | self.0)
    }

    /// Per-lane choice: lanes set here come from `on_true`, the rest from
    /// `on_false`.
    #[inline(always)]
    pub fn select(self, on_true: Swar<W, R>, on_false: Swar<W, R>) -> Swar<W, R> {
        let mask = self.to_lane_mask();
        (on_true & mask) | (on_false & !mask)
    }
}

/// Logical NOT: flips the guard bit of every lane and nothing else.
impl<const W: u32, R: LaneMasks<W>> Not for BooleanSwar<W, R> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(self.0 ^ <R as LaneMasks<W>>::MOST_SIGNIFICANT_BIT)
    }
}

impl<const W: u32, R: Register> BitAnd for BooleanSwar<W, R> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl<const W: u32, R: Register> BitOr for BooleanSwar<W, R> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl<const W: u32, R: Register> BitXor for BooleanSwar<W, R> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl<const W: u32, R: LaneMasks<W>> IntoIterator for BooleanSwar<W, R> {
    type Item = u32;
    type IntoIter = LaneIndices<W, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Indices of set lanes, produced by [`BooleanSwar::iter`].
///
/// Uses the `while m != 0 { tzcnt(m); m = blsr(m) }` pattern, so the cost is
/// proportional to the number of set lanes.
#[derive(Clone, Debug)]
pub struct LaneIndices<const W: u32, R: Register> {
    bits: R,
}

impl<const W: u32, R: LaneMasks<W>> Iterator for LaneIndices<W, R> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        if self.bits == R::ZERO {
            return None;
        }
        let lane = tzcnt(self.bits) / W;
        self.bits = blsr(self.bits);
        Some(lane)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = popcnt(self.bits) as usize;
        (n, Some(n))
    }
}

impl<const W: u32, R: LaneMasks<W>> ExactSizeIterator for LaneIndices<W, R> {}
