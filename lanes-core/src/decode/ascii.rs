//! Fixed-length ASCII digit strings.
//!
//! Both entry points copy the text into a register of byte lanes, subtract a
//! broadcast `'0'` from every lane and hand the result to
//! [`decode_base10`]. They do not validate: every byte must be an ASCII digit,
//! anything else gives an unspecified result (checked in debug builds).

use crate::decode::base10::decode_base10;
use crate::intrinsics::mask::broadcast;
use crate::swar::Swar;

const ASCII_ZERO_X8: Swar<8, u64> = Swar::new(broadcast(b'0' as u128, 8, 64) as u64);
const ASCII_ZERO_X16: Swar<8, u128> = Swar::new(broadcast(b'0' as u128, 8, 128));

/// Parses exactly eight ASCII digits.
///
/// ```
/// use lanes_core::parse_eight_digits;
///
/// assert_eq!(parse_eight_digits(b"00012345"), 12_345);
/// ```
#[inline]
pub fn parse_eight_digits(text: &[u8; 8]) -> u32 {
    debug_assert!(text.iter().all(u8::is_ascii_digit), "non-digit byte in {:?}", text);
    let digits = Swar::<8, u64>::new(u64::from_le_bytes(*text)).wrapping_sub(ASCII_ZERO_X8);
    // 8 digits < 10^8 < 2^32
    decode_base10(digits) as u32
}

/// Parses exactly sixteen ASCII digits.
///
/// ```
/// use lanes_core::parse_sixteen_digits;
///
/// assert_eq!(parse_sixteen_digits(b"9999999999999999"), 9_999_999_999_999_999);
/// ```
#[inline]
pub fn parse_sixteen_digits(text: &[u8; 16]) -> u64 {
    debug_assert!(text.iter().all(u8::is_ascii_digit), "non-digit byte in {:?}", text);
    let digits = Swar::<8, u128>::new(u128::from_le_bytes(*text)).wrapping_sub(ASCII_ZERO_X16);
    // 16 digits < 10^16 < 2^64
    decode_base10(digits) as u64
}
