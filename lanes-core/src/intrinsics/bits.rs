// =============================================================================
// Bit Manipulation Intrinsics
// =============================================================================
//
// Generic over every register storage type. Each function lowers to a single
// instruction on targets that provide it (TZCNT/LZCNT/POPCNT/BLSR/BLSI).

use crate::register::Register;

/// Count trailing zeros. Returns `R::BITS` for zero.
#[inline(always)]
pub fn tzcnt<R: Register>(x: R) -> u32 {
    x.trailing_zeros()
}

/// Count leading zeros. Returns `R::BITS` for zero.
#[inline(always)]
pub fn lzcnt<R: Register>(x: R) -> u32 {
    x.leading_zeros()
}

/// Population count.
#[inline(always)]
pub fn popcnt<R: Register>(x: R) -> u32 {
    x.count_ones()
}

/// Bit scan and reset: clears the lowest set bit.
///
/// Equivalent to `x & (x - 1)`.
#[inline(always)]
pub fn blsr<R: Register>(x: R) -> R {
    x & x.wrapping_sub(R::ONE)
}

/// Isolates the lowest set bit; zero stays zero.
///
/// Equivalent to `x & -x`.
#[inline(always)]
pub fn blsi<R: Register>(x: R) -> R {
    x & R::ZERO.wrapping_sub(x)
}

/// Index of the most significant set bit, or `None` for zero.
#[inline(always)]
pub fn msb_index<R: Register>(x: R) -> Option<u32> {
    if x == R::ZERO {
        None
    } else {
        Some(R::BITS - 1 - x.leading_zeros())
    }
}
