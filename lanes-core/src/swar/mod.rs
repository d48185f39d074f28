// =============================================================================
// SWAR Submodules
// =============================================================================

/// The `Swar` register value: construction, lane access, bitwise operators.
pub mod lanes;

/// Carry-isolated lane-wise arithmetic.
pub mod arith;

/// Hit masks: one boolean per lane stored in the lane's top bit.
pub mod boolean;

/// Lane-wise comparisons producing hit masks.
pub mod compare;

/// Per-lane bit statistics (population count, floor log2).
pub mod lanewise;

/// Splitting lanes into double-width halves and merging them back.
pub mod precision;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use arith::ArithmeticResult;
pub use boolean::{BooleanSwar, LaneIndices};
pub use lanes::{LaneValues, Swar};
pub use precision::SwarPair;
