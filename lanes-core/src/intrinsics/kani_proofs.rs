//! Kani formal verification proofs for lane arithmetic.
//!
//! Registers are kept small (`u8`/`u16`) so that every proof is exhaustive over
//! the full input space and finishes quickly.
//!
//! Run with: `cargo kani --package lanes-core`

use crate::decode::decode_base10;
use crate::intrinsics::bits::{blsr, tzcnt};
use crate::intrinsics::log::{ceil_log2, floor_log2};
use crate::swar::Swar;

// ============================================================================
// Proof 1: blsr clears exactly one bit
// ============================================================================
// File: bits.rs
// What: blsr(x) has exactly one fewer set bit than x
// Why: hit-mask iteration terminates and visits every lane

#[kani::proof]
fn verify_blsr_clears_one_bit() {
    let x: u16 = kani::any();
    kani::assume(x != 0);

    let result = blsr(x);

    kani::assert(result.count_ones() == x.count_ones() - 1, "blsr must clear exactly one bit");
    kani::assert(result & (1u16 << tzcnt(x)) == 0, "blsr must clear the lowest set bit");
}

// ============================================================================
// Proof 2: floor/ceil log2 bracket their argument
// ============================================================================
// File: log.rs
// What: 2^floor <= x < 2^(floor+1) and 2^(ceil-1) < x <= 2^ceil

#[kani::proof]
fn verify_log2_brackets() {
    let x: u32 = kani::any();
    kani::assume(x != 0);
    let x = x as u64;

    let floor = floor_log2(x);
    let ceil = ceil_log2(x);

    kani::assert((1u64 << floor) <= x, "2^floor must not exceed x");
    kani::assert(x < (1u64 << (floor + 1)), "x must be below 2^(floor+1)");
    kani::assert(x <= (1u64 << ceil), "x must not exceed 2^ceil");
    kani::assert(ceil == floor || ceil == floor + 1, "ceil is floor or floor + 1");
}

// ============================================================================
// Proof 3: carry isolation of wrapping_add / wrapping_sub
// ============================================================================
// File: swar/arith.rs
// What: every nibble of the result equals the scalar modular result

#[kani::proof]
fn verify_nibble_add_sub_isolated() {
    let a: u16 = kani::any();
    let b: u16 = kani::any();

    let sum = Swar::<4, u16>::new(a).wrapping_add(Swar::new(b));
    let diff = Swar::<4, u16>::new(a).wrapping_sub(Swar::new(b));

    for lane in 0..4 {
        let x = (a >> (lane * 4)) & 0xF;
        let y = (b >> (lane * 4)) & 0xF;
        kani::assert(sum.at(lane) == (x + y) & 0xF, "lane sum must be (x + y) mod 16");
        kani::assert(diff.at(lane) == x.wrapping_sub(y) & 0xF, "lane difference must be (x - y) mod 16");
    }
}

// ============================================================================
// Proof 4: comparisons match per-lane scalar predicates
// ============================================================================
// File: swar/compare.rs
// What: equals/less_than set exactly the guard bits of lanes where the
// predicate holds, and nothing else

#[kani::proof]
fn verify_nibble_comparisons() {
    let a: u16 = kani::any();
    let b: u16 = kani::any();

    let sa = Swar::<4, u16>::new(a);
    let sb = Swar::<4, u16>::new(b);
    let eq = sa.equals(sb);
    let lt = sa.less_than(sb);

    kani::assert(eq.value() & 0x7777 == 0, "equals touches only guard bits");
    kani::assert(lt.value() & 0x7777 == 0, "less_than touches only guard bits");

    for lane in 0..4 {
        let x = sa.at(lane);
        let y = sb.at(lane);
        kani::assert(eq.get(lane) == (x == y), "equals must match scalar ==");
        kani::assert(lt.get(lane) == (x < y), "less_than must match scalar <");
    }
}

// ============================================================================
// Proof 5: decode of two-digit registers
// ============================================================================
// File: decode/base10.rs
// What: any pair of digits in 4-bit lanes decodes to 10 * first + second

#[kani::proof]
fn verify_decode_two_digits() {
    let first: u8 = kani::any();
    let second: u8 = kani::any();
    kani::assume(first <= 9 && second <= 9);

    let digits = Swar::<4, u8>::from_lanes(&[first, second]);

    kani::assert(decode_base10(digits) == first * 10 + second, "two-digit decode");
}

// ============================================================================
// Proof 6: decode of four-digit registers
// ============================================================================
// File: decode/base10.rs
// What: four digits in 4-bit lanes decode to their Horner value

#[kani::proof]
fn verify_decode_four_digits() {
    let d: [u16; 4] = kani::any();
    kani::assume(d.iter().all(|&x| x <= 9));

    let digits = Swar::<4, u16>::from_lanes(&d);
    let expected = ((d[0] * 10 + d[1]) * 10 + d[2]) * 10 + d[3];

    kani::assert(decode_base10(digits) == expected, "four-digit decode");
}
