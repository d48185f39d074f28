//! Register storage types.
//!
//! [`Register`] abstracts over the native unsigned integers that back a SWAR
//! register. [`LaneMasks`] attaches the constants derived from a particular lane
//! width to each register type. Both are implemented for `u8`, `u16`, `u32`,
//! `u64` and `u128` by a macro, so every mask is a true associated constant
//! computed once per `(W, R)` pair during compilation.

use core::fmt::{Binary, Debug, LowerHex};
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use crate::geometry::LaneGeometry;
use crate::intrinsics::mask::{broadcast, half_mask, least_bits_mask};

/// Number of entries in [`Register::HALF_MASKS`].
pub const HALF_MASK_LEVELS: usize = 7;

/// A native unsigned integer used as SWAR register storage.
///
/// Arithmetic is always wrapping: lane isolation is the job of the SWAR layer,
/// the register itself simply computes modulo `2^BITS`.
pub trait Register:
    Copy
    + Eq
    + Hash
    + Default
    + Debug
    + LowerHex
    + Binary
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Register width in bits.
    const BITS: u32;
    /// All bits clear.
    const ZERO: Self;
    /// Only bit 0 set.
    const ONE: Self;
    /// All bits set.
    const MAX: Self;
    /// `HALF_MASKS[j]` selects the low half of every `2^(j+1)`-bit group, or is
    /// zero when such a group does not fit in the register.
    const HALF_MASKS: [Self; HALF_MASK_LEVELS];

    /// Addition modulo `2^BITS`.
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Subtraction modulo `2^BITS`.
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Multiplication modulo `2^BITS`.
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Number of set bits.
    fn count_ones(self) -> u32;
    /// Number of leading zero bits (`BITS` for zero).
    fn leading_zeros(self) -> u32;
    /// Number of trailing zero bits (`BITS` for zero).
    fn trailing_zeros(self) -> u32;
    /// Keeps the low `BITS` bits of `value`.
    fn truncate_u128(value: u128) -> Self;
    /// Zero-extends to `u128`.
    fn to_u128(self) -> u128;
    /// Loads little-endian bytes: `bytes[0]` lands in the least significant
    /// byte. Missing bytes are zero, excess bytes are ignored.
    fn from_le_slice(bytes: &[u8]) -> Self;
}

/// Constants derived from splitting a register into lanes of `W` bits.
///
/// The geometry is validated when [`LaneMasks::GEOMETRY`] is evaluated; every
/// other constant is computed from it so that an invalid `W` fails compilation
/// with the geometry's message.
pub trait LaneMasks<const W: u32>: Register {
    /// The validated geometry.
    const GEOMETRY: LaneGeometry;
    /// Bit 0 of every lane.
    const LEAST_SIGNIFICANT_BIT: Self;
    /// Top (guard) bit of every lane.
    const MOST_SIGNIFICANT_BIT: Self;
    /// Every bit except the guard bit of each lane.
    const LOWER_BITS: Self;
    /// All bits of lane 0.
    const LANE_MASK: Self;
}

macro_rules! impl_register {
    ($($t:ty),* $(,)?) => {$(
        impl Register for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$t>::MAX;
            const HALF_MASKS: [Self; HALF_MASK_LEVELS] = {
                let mut masks = [0 as $t; HALF_MASK_LEVELS];
                let mut level = 0;
                while level < HALF_MASK_LEVELS {
                    masks[level] = half_mask(level as u32, <$t>::BITS) as $t;
                    level += 1;
                }
                masks
            };

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn count_ones(self) -> u32 {
                <$t>::count_ones(self)
            }

            #[inline(always)]
            fn leading_zeros(self) -> u32 {
                <$t>::leading_zeros(self)
            }

            #[inline(always)]
            fn trailing_zeros(self) -> u32 {
                <$t>::trailing_zeros(self)
            }

            #[inline(always)]
            fn truncate_u128(value: u128) -> Self {
                value as $t
            }

            #[inline(always)]
            fn to_u128(self) -> u128 {
                self as u128
            }

            #[inline]
            fn from_le_slice(bytes: &[u8]) -> Self {
                let mut buf = [0u8; core::mem::size_of::<$t>()];
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                <$t>::from_le_bytes(buf)
            }
        }

        impl<const W: u32> LaneMasks<W> for $t {
            const GEOMETRY: LaneGeometry = LaneGeometry::new(W, <$t>::BITS);
            const LEAST_SIGNIFICANT_BIT: Self = {
                let g = <$t as LaneMasks<W>>::GEOMETRY;
                broadcast(1, g.lane_bits, g.register_bits) as $t
            };
            const MOST_SIGNIFICANT_BIT: Self = {
                let g = <$t as LaneMasks<W>>::GEOMETRY;
                broadcast(1 << (g.lane_bits - 1), g.lane_bits, g.register_bits) as $t
            };
            const LOWER_BITS: Self = <$t as LaneMasks<W>>::MOST_SIGNIFICANT_BIT
                - <$t as LaneMasks<W>>::LEAST_SIGNIFICANT_BIT;
            const LANE_MASK: Self = {
                let g = <$t as LaneMasks<W>>::GEOMETRY;
                least_bits_mask(g.lane_bits) as $t
            };
        }
    )*};
}

impl_register!(u8, u16, u32, u64, u128);
