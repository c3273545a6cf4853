//! Sign of a double, including the sign of zero.

/// Sign field of an encoded double.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Reads the sign of `value` without touching its storage.
    ///
    /// `-0.0 < 0.0` is false, so negative zero is told apart by its reciprocal,
    /// which is negative infinity.
    pub(crate) fn of(value: f64) -> Self {
        if value < 0.0 || 1.0 / value == f64::NEG_INFINITY {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }

    /// The sign field as a single character.
    pub fn bit(self) -> char {
        match self {
            Self::Positive => '0',
            Self::Negative => '1',
        }
    }
}
