//! Lane-wise comparisons.
//!
//! Every comparison costs a handful of whole-register operations regardless of
//! the lane count. Equality uses XOR and detects all-zero lanes; ordering uses a
//! guarded subtraction whose per-lane sign is recovered with a bitwise median
//! (Knuth, TAOCP 4A §7.1.3).

use crate::register::{LaneMasks, Register};
use crate::swar::boolean::BooleanSwar;
use crate::swar::lanes::Swar;

/// Bitwise majority of three values.
#[inline(always)]
fn median<R: Register>(x: R, y: R, z: R) -> R {
    (x | y) & (y | z) & (x | z)
}

impl<const W: u32, R: LaneMasks<W>> Swar<W, R> {
    /// Lanes where `self` and `rhs` hold the same value.
    ///
    /// ```
    /// use lanes_core::Swar;
    ///
    /// let a = Swar::<8, u32>::from_lanes(&[1, 2, 3, 4]);
    /// let b = Swar::<8, u32>::from_lanes(&[1, 0, 3, 0]);
    /// let hits = a.equals(b);
    /// assert_eq!(hits.iter().collect::<Vec<_>>(), [0, 2]);
    /// ```
    #[inline(always)]
    pub fn equals(self, rhs: Self) -> BooleanSwar<W, R> {
        let h = <R as LaneMasks<W>>::MOST_SIGNIFICANT_BIT;
        let l = <R as LaneMasks<W>>::LEAST_SIGNIFICANT_BIT;
        let diff = self.0 ^ rhs.0;
        // With the guard forced on, subtracting 1 clears the guard only when
        // the lower bits were all zero.
        let lower_nonzero = (diff | h).wrapping_sub(l);
        BooleanSwar::from_guard_bits(!(diff | lower_nonzero))
    }

    /// Lanes where the values differ.
    #[inline(always)]
    pub fn not_equals(self, rhs: Self) -> BooleanSwar<W, R> {
        !self.equals(rhs)
    }

    /// Lanes where `self < rhs` (unsigned).
    #[inline(always)]
    pub fn less_than(self, rhs: Self) -> BooleanSwar<W, R> {
        let h = <R as LaneMasks<W>>::MOST_SIGNIFICANT_BIT;
        let l = <R as LaneMasks<W>>::LOWER_BITS;
        let (x, y) = (self.0, rhs.0);
        // Guard bit of z is 1 exactly when the lower bits did not borrow.
        let z = (x | h).wrapping_sub(y & l);
        BooleanSwar::from_guard_bits(!median(x, !y, z))
    }

    /// Lanes where `self >= rhs` (unsigned).
    #[inline(always)]
    pub fn greater_equal(self, rhs: Self) -> BooleanSwar<W, R> {
        !self.less_than(rhs)
    }

    /// Lanes where `self > rhs` (unsigned).
    #[inline(always)]
    pub fn greater_than(self, rhs: Self) -> BooleanSwar<W, R> {
        rhs.less_than(self)
    }

    /// Lanes where `self <= rhs` (unsigned).
    #[inline(always)]
    pub fn less_equal(self, rhs: Self) -> BooleanSwar<W, R> {
        !rhs.less_than(self)
    }

    /// Lanes holding a non-zero value.
    #[inline(always)]
    pub fn nonzero_lanes(self) -> BooleanSwar<W, R> {
        self.not_equals(Self::ZERO)
    }

    /// Index of the lowest lane equal to zero, or `None`.
    ///
    /// Cheaper than `equals(ZERO).first()`: the intermediate may show spurious
    /// hits above the first zero lane, but never below it.
    #[inline(always)]
    pub fn first_zero_lane(self) -> Option<u32> {
        let h = <R as LaneMasks<W>>::MOST_SIGNIFICANT_BIT;
        let l = <R as LaneMasks<W>>::LEAST_SIGNIFICANT_BIT;
        let hits = h & self.0.wrapping_sub(l) & !self.0;
        BooleanSwar::<W, R>::from_guard_bits(hits).first()
    }

    /// Index of the lowest lane where `self` and `rhs` agree, or `None`.
    #[inline(always)]
    pub fn first_matching_lane(self, rhs: Self) -> Option<u32> {
        (self ^ rhs).first_zero_lane()
    }
}
