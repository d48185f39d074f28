//! Precision doubling and halving.
//!
//! Widening splits a register of `W`-bit lanes into two registers of `2W`-bit
//! lanes: `even` holds lanes 0, 2, 4, ... and `odd` holds lanes 1, 3, 5, ...,
//! each zero-extended into the wider lane. Lane-wise sums and scalar products
//! that would overflow `W` bits fit comfortably after widening.

use core::fmt;

use crate::intrinsics::log::floor_log2;
use crate::register::{LaneMasks, Register};
use crate::swar::lanes::Swar;

/// Even and odd lanes of a register, each in lanes of twice the width.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SwarPair<const W: u32, R: Register> {
    /// Original lanes 0, 2, 4, ...
    pub even: Swar<W, R>,
    /// Original lanes 1, 3, 5, ...
    pub odd: Swar<W, R>,
}

impl<const W: u32, R: LaneMasks<W>> fmt::Debug for SwarPair<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwarPair")
            .field("even", &self.even)
            .field("odd", &self.odd)
            .finish()
    }
}

impl<const W: u32, R: LaneMasks<W>> Swar<W, R> {
    /// Splits into even and odd lanes of width `W2 = 2 * W`.
    ///
    /// ```
    /// use lanes_core::Swar;
    ///
    /// let pair = Swar::<4, u32>::new(0x89AB_CDEF).widen::<8>();
    /// assert_eq!(pair.even.value(), 0x090B_0D0F);
    /// assert_eq!(pair.odd.value(), 0x080A_0C0E);
    /// ```
    #[inline(always)]
    pub fn widen<const W2: u32>(self) -> SwarPair<W2, R>
    where
        R: LaneMasks<W2>,
    {
        const { assert!(W2 == 2 * W, "widening must double the lane width") };
        let keep = <R as Register>::HALF_MASKS[floor_log2(W as u64) as usize];
        SwarPair {
            even: Swar::new(self.0 & keep),
            odd: Swar::new((self.0 >> W) & keep),
        }
    }
}

impl<const W2: u32, R: LaneMasks<W2>> SwarPair<W2, R> {
    /// Reassembles lanes of width `W = W2 / 2`, keeping the low half of each
    /// wide lane.
    #[inline(always)]
    pub fn narrow<const W: u32>(self) -> Swar<W, R>
    where
        R: LaneMasks<W>,
    {
        const { assert!(W2 == 2 * W, "narrowing must halve the lane width") };
        let keep = <R as Register>::HALF_MASKS[floor_log2(W as u64) as usize];
        Swar::new((self.even.0 & keep) | ((self.odd.0 & keep) << W))
    }
}
