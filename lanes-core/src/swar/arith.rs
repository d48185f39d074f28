//! Carry-isolated lane-wise arithmetic.
//!
//! A full-width add or subtract lets carries and borrows run from one lane into
//! the next. Every operation here first neutralises the top (guard) bit of each
//! lane so the full-width operation cannot cross a lane boundary, then restores
//! the correct guard bit with an XOR:
//!
//! ```text
//! lane:     [g | lower bits]
//! sum     = ((a & L) + (b & L)) ^ ((a ^ b) & H)
//! diff    = ((a | H) - (b & L)) ^ ((a ^ !b) & H)
//! ```
//!
//! where `H` is the guard bit of every lane and `L` the remaining bits.

use core::fmt;

use crate::register::{LaneMasks, Register};
use crate::swar::boolean::BooleanSwar;
use crate::swar::lanes::Swar;

/// Sum together with per-lane carry and signed-overflow flags.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ArithmeticResult<const W: u32, R: Register> {
    /// Lane-wise sum modulo `2^W`.
    pub result: Swar<W, R>,
    /// Lanes whose unsigned sum exceeded `2^W - 1`.
    pub carry: BooleanSwar<W, R>,
    /// Lanes whose two's-complement sum overflowed.
    pub overflow: BooleanSwar<W, R>,
}

impl<const W: u32, R: LaneMasks<W>> fmt::Debug for ArithmeticResult<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArithmeticResult")
            .field("result", &self.result)
            .field("carry", &self.carry)
            .field("overflow", &self.overflow)
            .finish()
    }
}

impl<const W: u32, R: LaneMasks<W>> Swar<W, R> {
    /// Lane-wise `(a + b) mod 2^W`. Overflow in a lane never reaches its
    /// neighbour.
    ///
    /// ```
    /// use lanes_core::Swar;
    ///
    /// let a = Swar::<8, u32>::from_lanes(&[0xFF, 1, 0x80, 7]);
    /// let b = Swar::<8, u32>::from_lanes(&[0x01, 1, 0x80, 0]);
    /// assert_eq!(a.wrapping_add(b), Swar::from_lanes(&[0, 2, 0, 7]));
    /// ```
    #[inline(always)]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        let h = <R as LaneMasks<W>>::MOST_SIGNIFICANT_BIT;
        let l = <R as LaneMasks<W>>::LOWER_BITS;
        let partial = (self.0 & l).wrapping_add(rhs.0 & l);
        Self(partial ^ ((self.0 ^ rhs.0) & h))
    }

    /// Lane-wise `(a - b) mod 2^W`. Borrows never leave their lane.
    #[inline(always)]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        let h = <R as LaneMasks<W>>::MOST_SIGNIFICANT_BIT;
        let l = <R as LaneMasks<W>>::LOWER_BITS;
        // Minuend guard set, subtrahend guard clear: the lower bits can borrow
        // at most the guard bit of their own lane.
        let partial = (self.0 | h).wrapping_sub(rhs.0 & l);
        Self(partial ^ ((self.0 ^ !rhs.0) & h))
    }

    /// Lane-wise addition that also reports unsigned carry-out and signed
    /// overflow per lane.
    pub fn full_add(self, rhs: Self) -> ArithmeticResult<W, R> {
        let h = <R as LaneMasks<W>>::MOST_SIGNIFICANT_BIT;
        let l = <R as LaneMasks<W>>::LOWER_BITS;

        let partial = (self.0 & l).wrapping_add(rhs.0 & l);
        let a_sign = self.0 & h;
        let b_sign = rhs.0 & h;
        let partial_sign = partial & h;
        let result = partial ^ a_sign ^ b_sign;

        // Carry out of a lane: at least two of the three guard-bit inputs set.
        let carry = (a_sign & b_sign) | (a_sign & partial_sign) | (b_sign & partial_sign);
        // Signed overflow: operands agree in sign, result disagrees.
        let overflow = (a_sign ^ b_sign ^ h) & (a_sign ^ result);

        ArithmeticResult {
            result: Self(result),
            carry: BooleanSwar::from_guard_bits(carry),
            overflow: BooleanSwar::from_guard_bits(overflow),
        }
    }

    /// Lane-wise addition clamped at `2^W - 1`.
    #[inline]
    pub fn saturating_add(self, rhs: Self) -> Self {
        let sum = self.full_add(rhs);
        sum.result | sum.carry.to_lane_mask()
    }

    /// Lane-wise two's-complement negation, `(2^W - a) mod 2^W`.
    #[inline]
    pub fn negate(self) -> Self {
        (!self).wrapping_add(Self::LEAST_SIGNIFICANT_BIT)
    }
}
