//! Field widths and exponent limits of the binary64 format.

/// Total width of the encoded string.
pub const TOTAL_BITS: usize = 64;

/// Width of the stored exponent field.
pub const EXPONENT_BITS: usize = 11;

/// Width of the stored fraction field.
pub const MANTISSA_BITS: usize = 52;

/// Offset added to the true exponent to obtain the stored one.
pub const EXPONENT_BIAS: i32 = 1023;

/// All-ones exponent field, reserved for infinities (and NaN, which is never produced).
pub const MAX_BIASED_EXPONENT: u16 = 0x7ff;

/// Largest true exponent of a finite double.
pub(crate) const MAX_EXPONENT: i32 = 1023;

/// Smallest true exponent that still carries the implicit leading 1.
pub(crate) const MIN_NORMAL_EXPONENT: i32 = -1022;

/// Exponent of the smallest positive subnormal, `2^-1074`.
pub(crate) const MIN_SUBNORMAL_EXPONENT: i32 = MIN_NORMAL_EXPONENT - MANTISSA_BITS as i32;
