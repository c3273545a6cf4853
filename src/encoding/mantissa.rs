//! Fraction extraction by repeated doubling.

use super::exponent::scale_by_inverse_pow2;
use super::layout::{EXPONENT_BIAS, MANTISSA_BITS, MIN_NORMAL_EXPONENT};

/// Returns the fractional part of `magnitude` for the given biased exponent.
///
/// Normal values lose their implicit leading 1. Zero and subnormals, whose true
/// exponent is at or below `-EXPONENT_BIAS`, are scaled by `2^1022` with no
/// implicit bit. The result always lies in `[0, 1)` for finite input.
pub(super) fn fraction_of(magnitude: f64, biased_exponent: u16) -> f64 {
    let exponent = i32::from(biased_exponent) - EXPONENT_BIAS;
    if exponent <= -EXPONENT_BIAS {
        scale_by_inverse_pow2(magnitude, MIN_NORMAL_EXPONENT)
    } else {
        scale_by_inverse_pow2(magnitude, exponent) - 1.0
    }
}

/// Extracts `MANTISSA_BITS` bits from a fraction in `[0, 1)`, first bit most significant.
///
/// Each step doubles the remainder; a remainder of at least 1 yields a set bit
/// and drops back below 1. Bits past the 52nd are truncated, which is exact
/// because the fraction of a double never has more than 52 of them.
pub(super) fn extract_mantissa(fraction: f64) -> u64 {
    let mut remainder = fraction;
    let mut mantissa = 0u64;
    for _ in 0..MANTISSA_BITS {
        remainder *= 2.0;
        mantissa <<= 1;
        if remainder >= 1.0 {
            mantissa |= 1;
            remainder -= 1.0;
        }
    }
    mantissa
}
