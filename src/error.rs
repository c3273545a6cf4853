//! Error types for the encoder and the gcd helpers.
//!
//! Every finite double, both signed zeros and both infinities encode without
//! error. NaN is the only input the arithmetic derivation cannot describe, so it
//! is rejected with [`EncodeError::Nan`] instead of being mapped to an arbitrary
//! bit pattern.

use std::fmt;

/// Errors that can occur while encoding a double.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// NaN has no exponent or fraction the search can converge on.
    Nan,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nan => write!(f, "cannot encode NaN as a binary double"),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Errors that can occur while computing a greatest common divisor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GcdError {
    /// The input list held fewer than two numbers.
    TooFewNumbers { len: usize },
}

impl fmt::Display for GcdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewNumbers { len } => {
                write!(f, "gcd requires at least two numbers, got {len}")
            }
        }
    }
}

impl std::error::Error for GcdError {}
