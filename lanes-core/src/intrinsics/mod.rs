// =============================================================================
// Intrinsics Module
// =============================================================================
//
// Bit counting primitives, integer logarithms and constant mask generation.
// Everything here is either `const fn` or a thin `#[inline(always)]` wrapper
// around a single hardware instruction.

/// Bit manipulation: tzcnt, lzcnt, popcnt, blsr, blsi.
pub mod bits;

/// Integer floor/ceiling base-2 logarithms.
pub mod log;

/// Broadcast and contiguous-run mask generation.
pub mod mask;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Public Re-exports
// =============================================================================

// Bit operations
pub use bits::{blsi, blsr, lzcnt, msb_index, popcnt, tzcnt};

// Logarithms
pub use log::{ceil_log2, floor_log2, is_power_of_two};

// Mask generation
pub use mask::{broadcast, half_mask, least_bits_mask, most_bits_mask};
