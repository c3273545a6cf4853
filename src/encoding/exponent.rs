//! Exponent search and exact power-of-two scaling.

use super::layout::{
    EXPONENT_BIAS, MAX_BIASED_EXPONENT, MAX_EXPONENT, MIN_SUBNORMAL_EXPONENT,
};

/// Divides `value` by `2^exponent` one factor of two at a time.
///
/// Halving a value that stays at or above `2^-1022` and doubling a value that
/// stays below `2^1024` are both exact, which covers every call the encoder
/// makes. A single `powi` could underflow `2^exponent` for the subnormal range.
pub(super) fn scale_by_inverse_pow2(value: f64, exponent: i32) -> f64 {
    let mut scaled = value;
    if exponent >= 0 {
        for _ in 0..exponent {
            scaled /= 2.0;
        }
    } else {
        for _ in exponent..0 {
            scaled *= 2.0;
        }
    }
    scaled
}

/// Finds the biased exponent of a non-negative, non-NaN magnitude.
///
/// Starting from `e = 0`, the search steps `e` up while `magnitude / 2^e - 1 >= 1`
/// and down while it is negative. `scaled` tracks `magnitude / 2^e` exactly, so
/// every step recomputes the fraction without rounding.
///
/// The search is confined to `MIN_SUBNORMAL_EXPONENT..=MAX_EXPONENT`:
/// - stepping above `MAX_EXPONENT` only happens for infinity, which maps to the all-ones field
/// - stepping below `MIN_SUBNORMAL_EXPONENT` only happens for zero, which maps to 0
///
/// Subnormal magnitudes converge below the normal range; their biased value is
/// clamped to 0.
pub(super) fn search_biased_exponent(magnitude: f64) -> u16 {
    let mut exponent = 0;
    let mut scaled = magnitude;

    loop {
        let fraction = scaled - 1.0;
        if fraction >= 1.0 {
            if exponent == MAX_EXPONENT {
                tracing::debug!(magnitude, "exponent search saturated, encoding infinity");
                return MAX_BIASED_EXPONENT;
            }
            exponent += 1;
            scaled /= 2.0;
        } else if fraction < 0.0 {
            if exponent == MIN_SUBNORMAL_EXPONENT {
                return 0;
            }
            exponent -= 1;
            scaled *= 2.0;
        } else {
            break;
        }
    }

    // clamped into 0..=2046, so the conversion cannot fail
    u16::try_from((exponent + EXPONENT_BIAS).max(0)).unwrap_or_default()
}
