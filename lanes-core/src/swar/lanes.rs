//! The SWAR register value.
//!
//! [`Swar<W, R>`] views a register of type `R` as `R::BITS / W` unsigned lanes of
//! `W` bits each. Lane 0 occupies the least significant bits. Values are plain
//! `Copy` data: every operation consumes registers and returns a new one.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitXor, Not};

use crate::geometry::LaneGeometry;
use crate::intrinsics::bits::{msb_index, tzcnt};
use crate::register::{LaneMasks, Register};

/// A register of `R` split into lanes of `W` bits.
///
/// `==` compares the whole register. Lane-wise equality is
/// [`Swar::equals`], which yields one boolean per lane.
///
/// # Example
///
/// ```
/// use lanes_core::Swar;
///
/// let s = Swar::<8, u32>::from_lanes(&[1, 2, 3, 5]);
/// assert_eq!(s.value(), 0x0503_0201);
/// assert_eq!(s.at(3), 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Swar<const W: u32, R: Register>(pub(crate) R);

impl<const W: u32, R: LaneMasks<W>> Swar<W, R> {
    /// Lane geometry, validated at compile time.
    pub const GEOMETRY: LaneGeometry = <R as LaneMasks<W>>::GEOMETRY;
    /// Number of lanes.
    pub const LANES: u32 = Self::GEOMETRY.lanes;
    /// Bits per lane.
    pub const NBITS: u32 = W;

    /// All lanes zero.
    pub const ZERO: Self = Self(R::ZERO);
    /// All lanes at their maximum value.
    pub const ALL_ONES: Self = Self(R::MAX);
    /// Value 1 in every lane.
    pub const LEAST_SIGNIFICANT_BIT: Self = Self(<R as LaneMasks<W>>::LEAST_SIGNIFICANT_BIT);
    /// Top bit of every lane.
    pub const MOST_SIGNIFICANT_BIT: Self = Self(<R as LaneMasks<W>>::MOST_SIGNIFICANT_BIT);
    /// Every bit of every lane except its top bit.
    pub const LOWER_BITS: Self = Self(<R as LaneMasks<W>>::LOWER_BITS);

    /// Wraps a raw register value.
    #[inline(always)]
    pub const fn new(value: R) -> Self {
        let _: LaneGeometry = Self::GEOMETRY;
        Self(value)
    }

    /// The raw register value.
    #[inline(always)]
    pub const fn value(self) -> R {
        self.0
    }

    /// Copies `lane_value` into every lane. Bits above the lane width are
    /// discarded.
    #[inline(always)]
    pub fn broadcast(lane_value: R) -> Self {
        let lane = lane_value & <R as LaneMasks<W>>::LANE_MASK;
        Self::new(lane.wrapping_mul(<R as LaneMasks<W>>::LEAST_SIGNIFICANT_BIT))
    }

    /// Builds a register from lane values, `values[0]` going to lane 0.
    ///
    /// Missing lanes are zero. Each value is truncated to the lane width.
    pub fn from_lanes(values: &[R]) -> Self {
        debug_assert!(values.len() <= Self::LANES as usize, "more values than lanes");
        let mut packed = R::ZERO;
        for (lane, &v) in values.iter().take(Self::LANES as usize).enumerate() {
            packed = packed | ((v & <R as LaneMasks<W>>::LANE_MASK) << (lane as u32 * W));
        }
        Self::new(packed)
    }

    /// Loads bytes in memory order: `bytes[0]` becomes the least significant
    /// byte of the register.
    #[inline]
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        Self::new(R::from_le_slice(bytes))
    }

    /// Iterates lane values from lane 0 upward.
    #[inline]
    pub fn lanes(self) -> LaneValues<W, R> {
        LaneValues {
            value: self.0,
            front: 0,
            back: Self::LANES,
        }
    }

    /// Value of `lane`, moved down to the low bits.
    #[inline(always)]
    pub fn at(self, lane: u32) -> R {
        debug_assert!(lane < Self::LANES);
        (self.0 >> (lane * W)) & <R as LaneMasks<W>>::LANE_MASK
    }

    /// Keeps `lane` in place and clears every other lane.
    #[inline(always)]
    pub fn isolate_lane(self, lane: u32) -> Self {
        debug_assert!(lane < Self::LANES);
        Self(self.0 & (<R as LaneMasks<W>>::LANE_MASK << (lane * W)))
    }

    /// Replaces the contents of `lane` with `lane_value` (truncated to `W` bits).
    #[inline(always)]
    pub fn with_lane(self, lane: u32, lane_value: R) -> Self {
        debug_assert!(lane < Self::LANES);
        let offset = lane * W;
        let mask = <R as LaneMasks<W>>::LANE_MASK << offset;
        Self((self.0 & !mask) | ((lane_value & <R as LaneMasks<W>>::LANE_MASK) << offset))
    }

    /// Zeroes `lane`.
    #[inline(always)]
    pub fn clear_lane(self, lane: u32) -> Self {
        self.with_lane(lane, R::ZERO)
    }

    /// Moves every lane `count` positions toward the most significant end,
    /// filling with zero lanes.
    #[inline(always)]
    pub fn shift_lanes_left(self, count: u32) -> Self {
        if count >= Self::LANES {
            Self::ZERO
        } else {
            Self(self.0 << (count * W))
        }
    }

    /// Moves every lane `count` positions toward lane 0, filling with zero lanes.
    #[inline(always)]
    pub fn shift_lanes_right(self, count: u32) -> Self {
        if count >= Self::LANES {
            Self::ZERO
        } else {
            Self(self.0 >> (count * W))
        }
    }

    /// Lane holding the least significant set bit, or `None` if the register is
    /// zero.
    #[inline(always)]
    pub fn lsb_lane(self) -> Option<u32> {
        if self.0 == R::ZERO {
            None
        } else {
            Some(tzcnt(self.0) / W)
        }
    }

    /// Lane holding the most significant set bit, or `None` if the register is
    /// zero. This is a lane index, not a bit index: for 4-bit lanes in a `u32`,
    /// `0x0040_0000` gives lane 5.
    #[inline(always)]
    pub fn msb_lane(self) -> Option<u32> {
        msb_index(self.0).map(|bit| bit / W)
    }

    /// Multiplies the whole register by `multiplier`, wrapping.
    ///
    /// This is lane-wise multiplication only when every lane product fits in
    /// its lane; carries otherwise spill into the next lane.
    #[inline(always)]
    pub fn mul_scalar(self, multiplier: R) -> Self {
        Self(self.0.wrapping_mul(multiplier))
    }
}

/// Iterator over lane values, produced by [`Swar::lanes`].
#[derive(Clone, Debug)]
pub struct LaneValues<const W: u32, R: Register> {
    value: R,
    front: u32,
    back: u32,
}

impl<const W: u32, R: LaneMasks<W>> Iterator for LaneValues<W, R> {
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<R> {
        if self.front == self.back {
            return None;
        }
        let lane = (self.value >> (self.front * W)) & <R as LaneMasks<W>>::LANE_MASK;
        self.front += 1;
        Some(lane)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.back - self.front) as usize;
        (n, Some(n))
    }
}

impl<const W: u32, R: LaneMasks<W>> DoubleEndedIterator for LaneValues<W, R> {
    #[inline]
    fn next_back(&mut self) -> Option<R> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some((self.value >> (self.back * W)) & <R as LaneMasks<W>>::LANE_MASK)
    }
}

impl<const W: u32, R: LaneMasks<W>> ExactSizeIterator for LaneValues<W, R> {}

// =============================================================================
// Bitwise operators (whole register)
// =============================================================================

impl<const W: u32, R: Register> BitAnd for Swar<W, R> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl<const W: u32, R: Register> BitOr for Swar<W, R> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl<const W: u32, R: Register> BitXor for Swar<W, R> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl<const W: u32, R: Register> Not for Swar<W, R> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

/// Lanes are listed from lane 0 upward.
impl<const W: u32, R: LaneMasks<W>> fmt::Debug for Swar<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Swar<{}, u{}>[", W, R::BITS)?;
        for (i, lane) in self.lanes().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:#x}", lane)?;
        }
        f.write_str("]")
    }
}
