//! # lanes-core: SIMD Within A Register for Fixed-Width Unsigned Lanes
//!
//! `lanes-core` is a `no_std`, zero-allocation library that packs several
//! fixed-width unsigned integer *lanes* into one ordinary integer register
//! (`u8` through `u128`) and operates on all of them at once with plain scalar
//! instructions.
//!
//! ## Overview
//!
//! A register of `N` bits split into lanes of `W` bits holds `N / W` independent
//! values. Lane 0 occupies the least significant bits. The library provides:
//!
//! 1. **Lane geometry and masks** - compile-time constants such as "lowest bit of
//!    every lane" or "value V in every lane"
//! 2. **Carry-isolated arithmetic** - lane-wise add/subtract where overflow never
//!    crosses a lane boundary
//! 3. **Comparisons and hit masks** - per-lane predicates collected in the top bit
//!    of each lane, with horizontal queries (first/last/count)
//! 4. **Base-10 decoding** - 16 packed decimal digits to a `u64` in four
//!    whole-register passes
//!
//! ## Quick Start
//!
//! ```
//! use lanes_core::decode::parse_sixteen_digits;
//!
//! let value = parse_sixteen_digits(b"1234567898765432");
//! assert_eq!(value, 1_234_567_898_765_432);
//! ```
//!
//! ## Geometry Checks
//!
//! Lane width must evenly divide the register width. Violations are rejected at
//! compile time when the offending `Swar<W, R>` is instantiated:
//!
//! ```compile_fail
//! use lanes_core::Swar;
//!
//! // 3 does not divide 64
//! let _ = Swar::<3, u64>::new(0);
//! ```
//!
//! ## Module Organization
//!
//! - [`register`] - Register storage trait and per-geometry mask constants
//! - [`geometry`] - Lane geometry description and its invariants
//! - [`intrinsics`] - Bit primitives, logarithms and mask generation
//! - [`swar`] - The register value type and its lane-wise operations
//! - [`decode`] - Log-depth base-10 decoding

#![no_std]
#![deny(missing_docs)]

#[cfg(test)]
extern crate std;

// =============================================================================
// Module Declarations
// =============================================================================

/// Lane geometry: lane width, register width, lane count.
pub mod geometry;

/// Bit manipulation, logarithms and broadcast mask generation.
pub mod intrinsics;

/// Register storage types and their per-geometry constants.
pub mod register;

/// Lane-wise arithmetic, comparisons and horizontal reductions.
pub mod swar;

/// Base-10 decoding of packed digit lanes.
pub mod decode;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use decode::{decode_base10, parse_eight_digits, parse_sixteen_digits};
pub use geometry::LaneGeometry;
pub use intrinsics::{broadcast, ceil_log2, floor_log2};
pub use register::{LaneMasks, Register};
pub use swar::{ArithmeticResult, BooleanSwar, Swar, SwarPair};
