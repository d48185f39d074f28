//! Lane geometry.
//!
//! A geometry pairs a lane width `W` with a register width `N`. It carries no
//! behavior beyond validating its own invariants, which happens during constant
//! evaluation so that an invalid pairing never reaches a running program.

/// Register widths backed by a native unsigned integer type.
pub const SUPPORTED_REGISTER_BITS: [u32; 5] = [8, 16, 32, 64, 128];

/// Compile-time description of how a register is split into lanes.
///
/// # Example
///
/// ```
/// use lanes_core::LaneGeometry;
///
/// const DIGITS: LaneGeometry = LaneGeometry::new(8, 128);
/// assert_eq!(DIGITS.lanes, 16);
/// assert_eq!(DIGITS.lane_of_bit(17), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LaneGeometry {
    /// Bits per lane (`W`).
    pub lane_bits: u32,
    /// Bits in the whole register (`N`).
    pub register_bits: u32,
    /// Number of lanes (`N / W`).
    pub lanes: u32,
}

impl LaneGeometry {
    /// Builds a geometry, panicking (at compile time when used in a constant)
    /// if the lane width is zero, does not divide the register width, or the
    /// register width has no native storage type.
    #[must_use]
    pub const fn new(lane_bits: u32, register_bits: u32) -> Self {
        assert!(lane_bits >= 1, "lane width must be at least one bit");
        assert!(
            is_supported_register(register_bits),
            "register width must be 8, 16, 32, 64 or 128 bits"
        );
        assert!(
            register_bits % lane_bits == 0,
            "lane width must evenly divide the register width"
        );
        Self {
            lane_bits,
            register_bits,
            lanes: register_bits / lane_bits,
        }
    }

    /// Bit offset of the least significant bit of `lane`.
    #[inline(always)]
    pub const fn lane_offset(&self, lane: u32) -> u32 {
        lane * self.lane_bits
    }

    /// Lane containing bit position `bit`.
    #[inline(always)]
    pub const fn lane_of_bit(&self, bit: u32) -> u32 {
        bit / self.lane_bits
    }

    /// Bit position of the top (guard) bit of `lane`.
    #[inline(always)]
    pub const fn guard_bit(&self, lane: u32) -> u32 {
        self.lane_offset(lane) + self.lane_bits - 1
    }

    /// Largest value a single lane can hold.
    #[inline(always)]
    pub const fn max_lane_value(&self) -> u128 {
        crate::intrinsics::least_bits_mask(self.lane_bits)
    }
}

const fn is_supported_register(bits: u32) -> bool {
    let mut i = 0;
    while i < SUPPORTED_REGISTER_BITS.len() {
        if SUPPORTED_REGISTER_BITS[i] == bits {
            return true;
        }
        i += 1;
    }
    false
}
