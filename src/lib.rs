#![warn(
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

//! Exact IEEE-754 double-precision bit strings, derived arithmetically.
//!
//! [`encode`] turns an `f64` into the 64 `'0'`/`'1'` characters of its binary64
//! representation (sign, 11-bit biased exponent, 52-bit mantissa) without
//! reading the value's storage. [`DoubleBits`] exposes the same fields in
//! structured form.
//!
//! The [`gcd`] module holds two small integer gcd algorithms that ship with the
//! encoder.

pub mod bit_utils;
mod encoding;
mod error;
pub mod gcd;
#[cfg(test)]
mod test_utils;

pub use encoding::layout::{
    EXPONENT_BIAS, EXPONENT_BITS, MANTISSA_BITS, MAX_BIASED_EXPONENT, TOTAL_BITS,
};
pub use encoding::{DoubleBits, DoubleClass, Sign, encode};
pub use error::{EncodeError, GcdError};
