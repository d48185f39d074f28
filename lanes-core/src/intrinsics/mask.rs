// =============================================================================
// Mask Generation
// =============================================================================
//
// All masks are computed in `u128` and truncated by the caller to the register
// type. Every function is `const fn` so the results become associated constants
// of the register types and are never recomputed at runtime.

/// Mask with the `count` least significant bits set.
///
/// ```
/// use lanes_core::intrinsics::least_bits_mask;
///
/// assert_eq!(least_bits_mask(4), 0xF);
/// assert_eq!(least_bits_mask(128), u128::MAX);
/// ```
#[inline(always)]
pub const fn least_bits_mask(count: u32) -> u128 {
    if count >= 128 {
        u128::MAX
    } else {
        (1u128 << count) - 1
    }
}

/// Mask with the `count` most significant bits of a `register_bits`-wide
/// register set.
#[inline(always)]
pub const fn most_bits_mask(count: u32, register_bits: u32) -> u128 {
    if count == 0 {
        0
    } else {
        least_bits_mask(register_bits) & !least_bits_mask(register_bits - count)
    }
}

/// Replicates the low `lane_bits` of `value` into every lane of a
/// `register_bits`-wide register.
///
/// The pattern is doubled (shift-and-or) until it covers the register, so the
/// cost is logarithmic in the lane count.
///
/// # Panics
///
/// Panics (at compile time in constant contexts) if `lane_bits` is zero or
/// wider than the register, or if the register is wider than 128 bits.
///
/// ```
/// use lanes_core::broadcast;
///
/// assert_eq!(broadcast(0x30, 8, 64), 0x3030_3030_3030_3030);
/// assert_eq!(broadcast(0b10, 2, 8), 0b1010_1010);
/// ```
pub const fn broadcast(value: u128, lane_bits: u32, register_bits: u32) -> u128 {
    assert!(lane_bits >= 1, "lane width must be at least one bit");
    assert!(lane_bits <= register_bits, "lane wider than register");
    assert!(register_bits <= 128, "register wider than 128 bits");

    let mut pattern = value & least_bits_mask(lane_bits);
    let mut filled = lane_bits;
    while filled < register_bits {
        pattern |= pattern << filled;
        filled *= 2;
    }
    pattern & least_bits_mask(register_bits)
}

/// Selects the low half of every group of `2 << level` bits.
///
/// `half_mask(0, 8) == 0b0101_0101`, `half_mask(2, 16) == 0x0F0F`. Returns zero
/// when a group would not fit in the register.
pub const fn half_mask(level: u32, register_bits: u32) -> u128 {
    let half = 1u32 << level;
    if half * 2 > register_bits {
        0
    } else {
        broadcast(least_bits_mask(half), half * 2, register_bits)
    }
}
