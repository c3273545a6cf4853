//! Greatest common divisor of two or more integers.
//!
//! Two classic algorithms are provided:
//! - [`euclid()`]: the remainder-based Euclidean algorithm
//! - [`stein()`]: Stein's binary algorithm, using only shifts and subtraction
//!
//! Inputs are taken by absolute value, so the result is unsigned and
//! `i32::MIN` is accepted. `gcd(0, x) = x` and `gcd(0, 0) = 0`.
//! The `_timed` variants also report how long the computation took.

mod euclid;
mod stein;

use std::time::{Duration, Instant};

use crate::error::GcdError;

/// A result paired with the wall-clock time spent computing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Greatest common divisor of `numbers` by the Euclidean algorithm.
///
/// # Errors
///
/// Returns [`GcdError::TooFewNumbers`] if fewer than two numbers are given.
///
/// # Examples
///
/// ```
/// use double_bits::gcd::euclid;
///
/// assert_eq!(euclid(&[12, 24, 4]), Ok(4));
/// assert_eq!(euclid(&[-42, -84]), Ok(42));
/// ```
pub fn euclid(numbers: &[i32]) -> Result<u32, GcdError> {
    fold_pairwise(numbers, euclid::gcd_pair)
}

/// Greatest common divisor of `numbers` by Stein's binary algorithm.
///
/// # Errors
///
/// Returns [`GcdError::TooFewNumbers`] if fewer than two numbers are given.
pub fn stein(numbers: &[i32]) -> Result<u32, GcdError> {
    fold_pairwise(numbers, stein::gcd_pair)
}

/// [`euclid()`] with the elapsed time.
pub fn euclid_timed(numbers: &[i32]) -> Result<Timed<u32>, GcdError> {
    timed("euclid", || euclid(numbers))
}

/// [`stein()`] with the elapsed time.
pub fn stein_timed(numbers: &[i32]) -> Result<Timed<u32>, GcdError> {
    timed("stein", || stein(numbers))
}

fn fold_pairwise(numbers: &[i32], gcd_pair: fn(u32, u32) -> u32) -> Result<u32, GcdError> {
    if numbers.len() < 2 {
        return Err(GcdError::TooFewNumbers { len: numbers.len() });
    }
    // 0 is the identity of gcd, so the fold visits every element
    Ok(numbers
        .iter()
        .map(|number| number.unsigned_abs())
        .fold(0, gcd_pair))
}

fn timed<T, F>(algorithm: &'static str, compute: F) -> Result<Timed<T>, GcdError>
where
    F: FnOnce() -> Result<T, GcdError>,
{
    let start = Instant::now();
    let value = compute()?;
    let elapsed = start.elapsed();
    tracing::trace!(algorithm, ?elapsed, "gcd computed");
    Ok(Timed { value, elapsed })
}
