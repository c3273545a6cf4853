//! Shared test utilities for the encoder.
//!
//! The reference encoding reads the stored bits directly, which is exactly what
//! the encoder itself avoids, so it serves as an independent oracle.

#![allow(clippy::expect_used)]

use crate::encoding::encode;

/// Encodes a non-NaN value, panicking on error.
pub fn encoded(value: f64) -> String {
    encode(value).expect("non-NaN input should encode")
}

/// The 64-character bit string of `value` taken from its raw storage.
pub fn reference_bits(value: f64) -> String {
    format!("{:064b}", value.to_bits())
}

/// Values spanning zero, subnormal, normal and infinite magnitudes, both signs.
pub fn sample_values() -> Vec<f64> {
    let magnitudes = [
        0.0,
        5e-324,
        1e-320,
        f64::MIN_POSITIVE / 3.0,
        f64::MIN_POSITIVE - 5e-324,
        f64::MIN_POSITIVE,
        1e-300,
        1e-10,
        0.1,
        0.2,
        0.3,
        1.0 / 3.0,
        0.5,
        0.75,
        1.0,
        1.0 + f64::EPSILON,
        1.5,
        2.0,
        std::f64::consts::E,
        std::f64::consts::PI,
        10.0,
        123.456,
        1024.0,
        65_535.0,
        1e10,
        9_007_199_254_740_993.0,
        1e100,
        1e300,
        f64::MAX,
        f64::INFINITY,
    ];
    magnitudes
        .iter()
        .flat_map(|&magnitude| [magnitude, -magnitude])
        .collect()
}
