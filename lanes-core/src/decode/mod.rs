// =============================================================================
// Decode Module
// =============================================================================
//
// Horizontal reduction of digit lanes into a scalar. The generic decoder works
// for any geometry with lanes of at least four bits; the ASCII entry points fix
// the geometry to byte lanes and handle the '0' normalisation.

/// Log-depth base-10 combination of digit lanes.
pub mod base10;

/// Fixed-length ASCII digit parsing on top of [`base10`].
pub mod ascii;

pub use ascii::{parse_eight_digits, parse_sixteen_digits};
pub use base10::decode_base10;
