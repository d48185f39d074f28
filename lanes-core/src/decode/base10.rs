//! Base-10 decoding by pairwise Horner combination.
//!
//! Lane 0 holds the most significant digit, matching text copied byte-for-byte
//! into a little-endian register: the first character lands in the lowest
//! lane. Each pass treats adjacent groups as a `(high, low)` pair and replaces
//! them with `high * 10^s + low`, where `s` is the number of digits per group:
//!
//! ```text
//! lanes:   1 | 2 | 3 | 4 | 5 | 6 | 7 | 8
//! pass 0:   12   |  34   |  56   |  78        (x 10)
//! pass 1:      1234      |     5678           (x 100)
//! pass 2:             12345678                (x 10_000)
//! ```
//!
//! The masked multiply of a pass runs over the whole register at once, so a
//! register of `n` lanes needs `ceil(log2(n))` passes instead of `n`
//! multiply-adds.

use crate::intrinsics::log::{ceil_log2, floor_log2};
use crate::register::LaneMasks;
use crate::swar::Swar;

/// `10^(2^k)` for every pass a 128-bit register can need.
const POWERS_OF_TEN: [u128; 6] = [
    10,
    100,
    10_000,
    100_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000_000_000_000_000_000,
];

/// Decodes a register of decimal digit lanes into the number they spell.
///
/// Every lane must hold a value in `0..=9`; lanes with other values produce an
/// unspecified result. Unused leading digits must be zero lanes at the low end.
/// The lane width must be at least 4 bits so that every intermediate group
/// fits in its lanes; narrower lanes are rejected at compile time.
///
/// ```
/// use lanes_core::{decode_base10, Swar};
///
/// // "0042" in 4-bit lanes, first digit in lane 0
/// let digits = Swar::<4, u16>::from_lanes(&[0, 0, 4, 2]);
/// assert_eq!(decode_base10(digits), 42);
/// ```
#[inline]
pub fn decode_base10<const W: u32, R: LaneMasks<W>>(digits: Swar<W, R>) -> R {
    // 10^2 < 2^8: two digits fit in two 4-bit lanes, and by induction every
    // group fits in the lanes it spans.
    const { assert!(W >= 4, "decimal digit lanes need at least 4 bits") };

    let first_level = floor_log2(W as u64);
    let passes = ceil_log2(Swar::<W, R>::LANES as u64);

    let mut acc = digits.value();
    for pass in 0..passes {
        let keep = R::HALF_MASKS[(first_level + pass) as usize];
        let group_bits = W << pass;
        let high = acc & keep;
        let low = (acc >> group_bits) & keep;
        let scale = R::truncate_u128(POWERS_OF_TEN[pass as usize]);
        acc = high.wrapping_mul(scale).wrapping_add(low);
    }
    acc
}
