//! # Tutorial: Parsing Sixteen Digits in Four Steps
//!
//! This example turns the text `"1234567898765432"` into a `u64` using one
//! 128-bit register split into sixteen 8-bit lanes.
//!
//! ## What You'll Learn
//!
//! 1. **Packing**: How text bytes land in lanes (first character in lane 0)
//! 2. **Validation**: How lane-wise comparisons check every byte at once
//! 3. **Normalisation**: How one carry-isolated subtraction turns ASCII into digits
//! 4. **Log-depth decoding**: How four masked multiply-adds combine 16 digits
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example tutorial_digits
//! ```

use lanes_core::{Register, Swar};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// The text to parse.
const TEXT: &[u8; 16] = b"1234567898765432";

/// Sixteen byte lanes in one `u128`.
type Digits = Swar<8, u128>;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Prints every lane of a byte register, lane 0 first.
fn print_lanes(label: &str, register: Digits) {
    let lanes: Vec<String> = register.lanes().map(|lane| format!("{:>3}", lane)).collect();
    println!("    {:<12} [{}]", label, lanes.join(" "));
}

/// Prints a register as groups of `group_bytes` bytes, lowest group first.
fn print_groups(label: &str, value: u128, group_bytes: u32) {
    let bits = group_bytes * 8;
    let mask = if bits == 128 { u128::MAX } else { (1u128 << bits) - 1 };
    let groups: Vec<String> = (0..16 / group_bytes)
        .map(|g| format!("{}", (value >> (g * bits)) & mask))
        .collect();
    println!("    {:<12} [{}]", label, groups.join(" | "));
}

// =============================================================================
// MAIN
// =============================================================================

fn main() {
    println!();
    println!("    Parsing {:?} with SWAR lanes", std::str::from_utf8(TEXT).unwrap());
    println!();

    // =========================================================================
    // STEP 1: PACK
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════════");
    println!("  STEP 1: PACK THE TEXT INTO LANES");
    println!("═══════════════════════════════════════════════════════════════════════════");
    println!();

    let text = Digits::from_le_bytes(TEXT);
    print_lanes("bytes", text);
    println!();
    println!("    Little-endian loading puts the first character ('1' = 49) in lane 0,");
    println!("    the least significant byte of the register.");
    println!();

    // =========================================================================
    // STEP 2: VALIDATE
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════════");
    println!("  STEP 2: CHECK EVERY LANE IS A DIGIT");
    println!("═══════════════════════════════════════════════════════════════════════════");
    println!();

    let below = text.less_than(Digits::broadcast(b'0' as u128));
    let above = text.greater_than(Digits::broadcast(b'9' as u128));
    let bad = below | above;
    println!("    lanes below '0': {}", below.count());
    println!("    lanes above '9': {}", above.count());
    println!("    first bad lane:  {:?}", bad.first());
    println!();

    // =========================================================================
    // STEP 3: NORMALISE
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════════");
    println!("  STEP 3: SUBTRACT '0' FROM EVERY LANE");
    println!("═══════════════════════════════════════════════════════════════════════════");
    println!();

    let digits = text.wrapping_sub(Digits::broadcast(b'0' as u128));
    print_lanes("digits", digits);
    println!();

    // =========================================================================
    // STEP 4: DECODE
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════════");
    println!("  STEP 4: COMBINE ADJACENT GROUPS");
    println!("═══════════════════════════════════════════════════════════════════════════");
    println!();

    // The same passes decode_base10 runs, spelled out.
    let mut acc = digits.value();
    let mut group_bytes = 1u32;
    let mut scale = 10u128;
    for level in 3..7 {
        let keep = u128::HALF_MASKS[level];
        let high = acc & keep;
        let low = (acc >> (group_bytes * 8)) & keep;
        acc = high * scale + low;
        group_bytes *= 2;
        scale *= scale;
        print_groups(&format!("x10^{}", group_bytes / 2), acc, group_bytes);
    }
    println!();

    let value = lanes_core::decode_base10(digits) as u64;
    assert_eq!(acc as u64, value);
    assert_eq!(value, lanes_core::parse_sixteen_digits(TEXT));
    println!("    Result: {}", value);
    println!("    Four passes instead of sixteen multiply-adds.");
    println!();
}
