//! Caller-side decimal parsing around the SWAR decoder.
//!
//! The decoder only turns one register of digit lanes into a number.
//! Everything else a text-to-integer conversion needs lives here: skipping
//! leading whitespace, an optional sign, digit validation, and accumulating
//! digit runs longer than one register. Each register's worth of digits is
//! validated with two lane-wise comparisons and decoded in log-depth passes.
//! The accumulator is then scaled by `10^k` for the `k` digits the register
//! held.
//!
//! Whitespace is the ASCII set `'\t'..='\r'` plus `' '`, the same bytes
//! `str::trim_start` removes from ASCII text.

use lanes_core::{broadcast, decode_base10, Swar};
use thiserror::Error;

/// Digits decoded per register.
pub const REGISTER_DIGITS: usize = 16;

type TextRegister = Swar<8, u128>;

const fn byte_lanes(byte: u8) -> TextRegister {
    Swar::new(broadcast(byte as u128, 8, 128))
}

const ASCII_ZERO: TextRegister = byte_lanes(b'0');
const ASCII_NINE: TextRegister = byte_lanes(b'9');
const ASCII_SPACE: TextRegister = byte_lanes(b' ');
const ASCII_TAB: TextRegister = byte_lanes(b'\t');
const ASCII_CR: TextRegister = byte_lanes(b'\r');

/// `10^k` for `k` in `0..=16`.
const POWERS_OF_TEN: [u64; REGISTER_DIGITS + 1] = {
    let mut powers = [1u64; REGISTER_DIGITS + 1];
    let mut k = 1;
    while k <= REGISTER_DIGITS {
        powers[k] = powers[k - 1] * 10;
        k += 1;
    }
    powers
};

/// Rejected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing left after whitespace and sign.
    #[error("no digits in input")]
    Empty,
    /// A byte that is not an ASCII digit.
    #[error("byte {byte:#04x} at offset {offset} is not a decimal digit")]
    InvalidDigit { offset: usize, byte: u8 },
    /// The digits spell a number outside the target type.
    #[error("number does not fit the target integer type")]
    Overflow,
}

/// Input split into its parts. `start` is the offset of the first digit.
struct Number<'a> {
    start: usize,
    negative: bool,
    digits: &'a [u8],
}

/// Scalar whitespace test.
#[inline]
pub fn is_space(byte: u8) -> bool {
    byte == b' ' || (b'\t'..=b'\r').contains(&byte)
}

/// Number of leading whitespace bytes, sixteen bytes per step.
pub fn leading_whitespace(input: &[u8]) -> usize {
    let mut skipped = 0;
    for chunk in input.chunks(REGISTER_DIGITS) {
        // Missing bytes load as zero, which is never whitespace.
        let text = TextRegister::from_le_bytes(chunk);
        let space = text.equals(ASCII_SPACE)
            | (text.greater_equal(ASCII_TAB) & text.less_equal(ASCII_CR));
        match (!space).first() {
            Some(lane) if (lane as usize) < chunk.len() => return skipped + lane as usize,
            _ => skipped += chunk.len(),
        }
    }
    skipped
}

/// Number of leading whitespace bytes, one byte per step.
pub fn leading_whitespace_scalar(input: &[u8]) -> usize {
    input.iter().position(|&b| !is_space(b)).unwrap_or(input.len())
}

/// Splits off the sign after `whitespace` leading bytes. `'-'` is a sign only
/// when `signed` is set; otherwise it is left in the digits and rejected there.
fn split_number(input: &[u8], whitespace: usize, signed: bool) -> Result<Number<'_>, ParseError> {
    let mut start = whitespace;
    let mut negative = false;
    match input.get(start) {
        Some(b'+') => start += 1,
        Some(b'-') if signed => {
            negative = true;
            start += 1;
        }
        _ => {}
    }
    let digits = &input[start..];
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(Number {
        start,
        negative,
        digits,
    })
}

/// Validates and decodes up to sixteen digits. On failure returns the index
/// of the first non-digit byte.
fn decode_register(chunk: &[u8]) -> Result<u64, usize> {
    debug_assert!(chunk.len() <= REGISTER_DIGITS);
    let text = TextRegister::from_le_bytes(chunk);
    let bad = text.less_than(ASCII_ZERO) | text.greater_than(ASCII_NINE);
    if let Some(lane) = bad.first() {
        // Lanes past the chunk hold zero bytes and always fail.
        let lane = lane as usize;
        if lane < chunk.len() {
            return Err(lane);
        }
    }
    // Move the digits to the top lanes; the zero lanes shifted in below them
    // act as leading zeros.
    let missing = (REGISTER_DIGITS - chunk.len()) as u32;
    let digits = text.wrapping_sub(ASCII_ZERO).shift_lanes_left(missing);
    // 16 digits < 10^16 < 2^64
    Ok(decode_base10(digits) as u64)
}

/// Magnitude of a digit run of any length, one register at a time.
///
/// The first non-digit byte is reported even when the digits before it have
/// already overflowed.
fn swar_magnitude(start: usize, digits: &[u8]) -> Result<u64, ParseError> {
    let mut accumulator = Some(0u64);
    let mut offset = start;
    for chunk in digits.chunks(REGISTER_DIGITS) {
        let value = decode_register(chunk).map_err(|i| ParseError::InvalidDigit {
            offset: offset + i,
            byte: chunk[i],
        })?;
        accumulator = accumulator
            .and_then(|acc| acc.checked_mul(POWERS_OF_TEN[chunk.len()]))
            .and_then(|acc| acc.checked_add(value));
        offset += chunk.len();
    }
    accumulator.ok_or(ParseError::Overflow)
}

/// Magnitude of a digit run, one multiply-add per digit. Same error order as
/// [`swar_magnitude`].
fn naive_magnitude(start: usize, digits: &[u8]) -> Result<u64, ParseError> {
    let mut accumulator = Some(0u64);
    for (i, &byte) in digits.iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(ParseError::InvalidDigit {
                offset: start + i,
                byte,
            });
        }
        accumulator = accumulator
            .and_then(|acc| acc.checked_mul(10))
            .and_then(|acc| acc.checked_add((byte - b'0') as u64));
    }
    accumulator.ok_or(ParseError::Overflow)
}

fn apply_sign(negative: bool, magnitude: u64) -> Result<i64, ParseError> {
    if negative {
        if magnitude > i64::MIN.unsigned_abs() {
            return Err(ParseError::Overflow);
        }
        Ok(0i64.wrapping_sub_unsigned(magnitude))
    } else {
        i64::try_from(magnitude).map_err(|_| ParseError::Overflow)
    }
}

/// Parses an unsigned decimal number with the SWAR decoder.
///
/// Accepts leading whitespace, an optional `+` and any number of digits, and
/// nothing after them.
pub fn parse_u64_swar(input: &[u8]) -> Result<u64, ParseError> {
    let number = split_number(input, leading_whitespace(input), false)?;
    swar_magnitude(number.start, number.digits)
}

/// Parses a signed decimal number with the SWAR decoder. Like
/// [`parse_u64_swar`], with `-` also accepted as a sign.
pub fn parse_i64_swar(input: &[u8]) -> Result<i64, ParseError> {
    let number = split_number(input, leading_whitespace(input), true)?;
    apply_sign(number.negative, swar_magnitude(number.start, number.digits)?)
}

/// Same contract as [`parse_u64_swar`], one byte at a time.
pub fn parse_u64_naive(input: &[u8]) -> Result<u64, ParseError> {
    let number = split_number(input, leading_whitespace_scalar(input), false)?;
    naive_magnitude(number.start, number.digits)
}

/// Same contract as [`parse_i64_swar`], one byte at a time.
pub fn parse_i64_naive(input: &[u8]) -> Result<i64, ParseError> {
    let number = split_number(input, leading_whitespace_scalar(input), true)?;
    apply_sign(number.negative, naive_magnitude(number.start, number.digits)?)
}
