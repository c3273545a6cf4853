//! Arithmetic derivation of the IEEE-754 double-precision bit string.
//!
//! The encoder never reinterprets the storage of its input. Each field is
//! recovered from the value itself:
//! - [`sign`]: comparison with zero, plus the reciprocal test for `-0.0`
//! - [`exponent`]: search for the power of two that normalizes the magnitude into `[1, 2)`
//! - [`mantissa`]: repeated doubling of the normalized fraction
//!
//! [`DoubleBits`] holds the three fields and renders them as the 64-character
//! `'0'`/`'1'` string, sign first.

mod display;
mod double_bits;
mod exponent;
pub mod layout;
mod mantissa;
mod sign;

pub use double_bits::{DoubleBits, DoubleClass, encode};
pub use sign::Sign;
