//! The encoded double and the `encode` entry point.

use std::fmt;

use crate::bit_utils::format_bits;
use crate::error::EncodeError;

use super::display::format_scientific;
use super::exponent::search_biased_exponent;
use super::layout::{EXPONENT_BIAS, EXPONENT_BITS, MANTISSA_BITS, MAX_BIASED_EXPONENT};
use super::mantissa::{extract_mantissa, fraction_of};
use super::sign::Sign;

/// Encodes `value` as its 64-character IEEE-754 binary64 string.
///
/// The string is the sign bit, the 11-bit biased exponent and the 52-bit
/// mantissa, most significant bit first.
///
/// # Errors
///
/// Returns [`EncodeError::Nan`] for NaN input. Every other double, infinities
/// and signed zeros included, encodes successfully.
///
/// # Examples
///
/// ```
/// use double_bits::encode;
///
/// let one = encode(1.0).unwrap();
/// assert_eq!(&one[..12], "001111111111");
/// assert!(one[12..].chars().all(|c| c == '0'));
///
/// assert!(encode(f64::NAN).is_err());
/// ```
pub fn encode(value: f64) -> Result<String, EncodeError> {
    DoubleBits::from_f64(value).map(|bits| bits.to_string())
}

/// Classification derived from the exponent and mantissa fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DoubleClass {
    Zero,
    Subnormal,
    Normal,
    Infinite,
}

/// Fields of an IEEE-754 binary64 value, derived arithmetically from an `f64`.
///
/// `Display` renders the 64-character bit string; the alternate form (`{:#}`)
/// separates sign, exponent and mantissa with spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DoubleBits {
    sign: Sign,
    biased_exponent: u16,
    mantissa: u64,
}

impl DoubleBits {
    /// Derives the sign, exponent and mantissa fields of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Nan`] if `value` is NaN.
    #[tracing::instrument(level = "trace", ret)]
    pub fn from_f64(value: f64) -> Result<Self, EncodeError> {
        if value.is_nan() {
            tracing::debug!("rejecting NaN input");
            return Err(EncodeError::Nan);
        }

        let sign = Sign::of(value);
        let magnitude = value.abs();
        let biased_exponent = search_biased_exponent(magnitude);
        let mantissa = if biased_exponent == MAX_BIASED_EXPONENT {
            0
        } else {
            extract_mantissa(fraction_of(magnitude, biased_exponent))
        };

        Ok(Self {
            sign,
            biased_exponent,
            mantissa,
        })
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Stored exponent field, in `0..=2047`.
    pub fn biased_exponent(&self) -> u16 {
        self.biased_exponent
    }

    /// Stored exponent minus the bias.
    ///
    /// This is the raw field difference: zero and subnormals report `-1023`
    /// even though subnormals are scaled by `2^-1022`.
    pub fn unbiased_exponent(&self) -> i32 {
        i32::from(self.biased_exponent) - EXPONENT_BIAS
    }

    /// The 52 fraction bits in the low bits of a `u64`.
    pub fn mantissa(&self) -> u64 {
        self.mantissa
    }

    pub fn class(&self) -> DoubleClass {
        match (self.biased_exponent, self.mantissa) {
            (0, 0) => DoubleClass::Zero,
            (0, _) => DoubleClass::Subnormal,
            (MAX_BIASED_EXPONENT, _) => DoubleClass::Infinite,
            _ => DoubleClass::Normal,
        }
    }

    pub fn sign_bit(&self) -> char {
        self.sign.bit()
    }

    /// The exponent field as 11 characters.
    pub fn exponent_bits(&self) -> String {
        format_bits(u64::from(self.biased_exponent), EXPONENT_BITS)
    }

    /// The mantissa field as 52 characters.
    pub fn mantissa_bits(&self) -> String {
        format_bits(self.mantissa, MANTISSA_BITS)
    }

    /// Renders the encoded value in normalized binary scientific notation,
    /// e.g. `"1.1 * 2^0"` for 1.5 or `"-1.0 * 2^-1074"` for the negated
    /// smallest subnormal.
    pub fn to_binary_scientific(&self) -> String {
        format_scientific(self)
    }
}

impl TryFrom<f64> for DoubleBits {
    type Error = EncodeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl fmt::Display for DoubleBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if f.alternate() { " " } else { "" };
        write!(
            f,
            "{}{separator}{}{separator}{}",
            self.sign_bit(),
            self.exponent_bits(),
            self.mantissa_bits()
        )
    }
}
