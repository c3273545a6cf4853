//! Normalized binary scientific rendering of an encoded double.
//!
//! Shows the significand in binary with the point after the first bit, adjusting
//! the exponent accordingly (e.g. "1.1 * 2^0" for 1.5).

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use super::double_bits::{DoubleBits, DoubleClass};
use super::layout::{MANTISSA_BITS, MIN_NORMAL_EXPONENT};

/// Renders `bits` as `[-]X.XXXX * 2^N` with trailing zero bits removed.
///
/// Zeros render as `0.0` and infinities as `inf`, both carrying the sign.
pub(super) fn format_scientific(bits: &DoubleBits) -> String {
    let sign = if bits.sign().is_negative() { "-" } else { "" };

    let (significand, exponent) = match bits.class() {
        DoubleClass::Zero => return format!("{sign}0.0"),
        DoubleClass::Infinite => return format!("{sign}inf"),
        DoubleClass::Normal => (
            BigUint::from(bits.mantissa() | (1u64 << MANTISSA_BITS)),
            bits.unbiased_exponent(),
        ),
        DoubleClass::Subnormal => (BigUint::from(bits.mantissa()), MIN_NORMAL_EXPONENT),
    };

    // value = significand * 2^(exponent - 52)
    let scale = BigInt::from(exponent) - MANTISSA_BITS;
    let (odd_significand, odd_scale) = strip_trailing_zeros(significand, scale);
    let (formatted_significand, adjusted_exponent) =
        format_significand_with_point(&odd_significand, &odd_scale);

    format!("{sign}{formatted_significand} * 2^{adjusted_exponent}")
}

/// Factors powers of two out of a non-zero significand.
fn strip_trailing_zeros(significand: BigUint, scale: BigInt) -> (BigUint, BigInt) {
    match significand.trailing_zeros() {
        Some(zeros) if zeros > 0 => (significand >> zeros, scale + zeros),
        _ => (significand, scale),
    }
}

/// Places a binary point after the first bit of `significand`.
/// Returns the formatted significand and the adjusted exponent.
fn format_significand_with_point(significand: &BigUint, scale: &BigInt) -> (String, BigInt) {
    if significand.is_zero() {
        return ("0.0".to_string(), BigInt::zero());
    }

    let binary_str = format!("{:b}", significand);
    let num_bits = binary_str.len();

    let formatted = if num_bits == 1 {
        format!("{}.0", binary_str)
    } else {
        format!("{}.{}", &binary_str[0..1], &binary_str[1..])
    };

    // new_exp = old_exp + (num_bits - 1)
    let adjusted_exponent = scale + (num_bits - 1);

    (formatted, adjusted_exponent)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn scientific(value: f64) -> String {
        format_scientific(&DoubleBits::from_f64(value).expect("non-NaN input should encode"))
    }

    #[test]
    fn single_bit_significand() {
        let (formatted, adjusted) =
            format_significand_with_point(&BigUint::from(1u32), &BigInt::from(0));
        assert_eq!(formatted, "1.0");
        assert_eq!(adjusted, BigInt::from(0));
    }

    #[test]
    fn multi_bit_significand() {
        // 123 decimal = 1111011 binary (7 bits)
        let (formatted, adjusted) =
            format_significand_with_point(&BigUint::from(123u32), &BigInt::from(5));
        assert_eq!(formatted, "1.111011");
        assert_eq!(adjusted, BigInt::from(11));
    }

    #[test]
    fn trailing_zeros_move_into_the_scale() {
        let (significand, scale) = strip_trailing_zeros(BigUint::from(12u32), BigInt::from(-3));
        assert_eq!(significand, BigUint::from(3u32));
        assert_eq!(scale, BigInt::from(-1));
    }

    #[test]
    fn normal_values() {
        assert_eq!(scientific(1.0), "1.0 * 2^0");
        assert_eq!(scientific(1.5), "1.1 * 2^0");
        assert_eq!(scientific(-0.5), "-1.0 * 2^-1");
        assert_eq!(scientific(10.0), "1.01 * 2^3");
        assert_eq!(scientific(f64::MIN_POSITIVE), "1.0 * 2^-1022");
    }

    #[test]
    fn subnormal_values() {
        assert_eq!(scientific(5e-324), "1.0 * 2^-1074");
        assert_eq!(scientific(f64::MIN_POSITIVE / 2.0), "1.0 * 2^-1023");
        assert_eq!(scientific(3.0 * 5e-324), "1.1 * 2^-1073");
    }

    #[test]
    fn zeros_and_infinities() {
        assert_eq!(scientific(0.0), "0.0");
        assert_eq!(scientific(-0.0), "-0.0");
        assert_eq!(scientific(f64::INFINITY), "inf");
        assert_eq!(scientific(f64::NEG_INFINITY), "-inf");
    }
}
