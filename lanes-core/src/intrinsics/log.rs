// =============================================================================
// Integer Logarithms
// =============================================================================
//
// Used to size shift amounts and the depth of log-depth lane reductions.

/// Floor of the base-2 logarithm: the index of the highest set bit.
///
/// `x` must be at least 1; zero is rejected by a debug assertion and yields an
/// unspecified value in release builds.
///
/// ```
/// use lanes_core::floor_log2;
///
/// assert_eq!(floor_log2(1), 0);
/// assert_eq!(floor_log2(7), 2);
/// assert_eq!(floor_log2(8), 3);
/// ```
#[inline(always)]
pub const fn floor_log2(x: u64) -> u32 {
    debug_assert!(x != 0, "floor_log2 is undefined for zero");
    63 - (x | 1).leading_zeros()
}

/// Ceiling of the base-2 logarithm.
///
/// Equal to [`floor_log2`] for exact powers of two, one more otherwise. Same
/// precondition: `x >= 1`.
///
/// ```
/// use lanes_core::ceil_log2;
///
/// assert_eq!(ceil_log2(7), 3);
/// assert_eq!(ceil_log2(8), 3);
/// assert_eq!(ceil_log2(9), 4);
/// ```
#[inline(always)]
pub const fn ceil_log2(x: u64) -> u32 {
    let floor = floor_log2(x);
    // Any bit besides the leading one rounds up.
    floor + ((x ^ (1u64 << floor)) != 0) as u32
}

/// True when exactly one bit of `x` is set.
#[inline(always)]
pub const fn is_power_of_two(x: u64) -> bool {
    x != 0 && (x & (x - 1)) == 0
}
