// ============================================================================
// Parity Classifier
// Classifies integer-valued numbers as even or odd
// ============================================================================

use std::fmt;

use super::errors::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parity of an integer-valued number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Classify an integer.
    #[inline]
    pub const fn of_integer(n: i64) -> Self {
        if n % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    #[inline]
    pub const fn is_even(self) -> bool {
        matches!(self, Parity::Even)
    }

    #[inline]
    pub const fn is_odd(self) -> bool {
        matches!(self, Parity::Odd)
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

/// Classify a float as even or odd.
///
/// Parity is only defined for integers, so a float qualifies only when it is
/// numerically an integer (`5.0` is odd, `4.0` is even). Values with a
/// non-zero fractional part are an error rather than being truncated.
///
/// # Errors
/// - `NotFinite` if the value is NaN or infinite
/// - `NonIntegerParity` if the value has a fractional part
///
/// # Example
/// ```ignore
/// use utilkit::numeric::{parity_of, Parity};
///
/// assert_eq!(parity_of(4.0)?, Parity::Even);
/// assert_eq!(parity_of(5.0)?, Parity::Odd);
/// assert!(parity_of(4.5).is_err());
/// ```
pub fn parity_of(number: f64) -> NumericResult<Parity> {
    if !number.is_finite() {
        return Err(NumericError::NotFinite);
    }
    if number.fract() != 0.0 {
        return Err(NumericError::NonIntegerParity(number));
    }

    // % 2.0 is exact for integer-valued floats of any magnitude
    if number % 2.0 == 0.0 {
        Ok(Parity::Even)
    } else {
        Ok(Parity::Odd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_parity() {
        assert_eq!(Parity::of_integer(4), Parity::Even);
        assert_eq!(Parity::of_integer(7), Parity::Odd);
        assert_eq!(Parity::of_integer(0), Parity::Even);
        assert_eq!(Parity::of_integer(-2), Parity::Even);
        assert_eq!(Parity::of_integer(-3), Parity::Odd);
    }

    #[test]
    fn test_float_parity() {
        assert_eq!(parity_of(4.0).unwrap(), Parity::Even);
        assert_eq!(parity_of(5.0).unwrap(), Parity::Odd);
        assert_eq!(parity_of(0.0).unwrap(), Parity::Even);
        assert_eq!(parity_of(-2.0).unwrap(), Parity::Even);
        assert_eq!(parity_of(-7.0).unwrap(), Parity::Odd);
    }

    #[test]
    fn test_fractional_values_are_rejected() {
        assert_eq!(
            parity_of(4.5).unwrap_err(),
            NumericError::NonIntegerParity(4.5)
        );
        assert!(parity_of(3.14).is_err());
        assert!(parity_of(-0.5).is_err());
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        assert_eq!(parity_of(f64::NAN).unwrap_err(), NumericError::NotFinite);
        assert_eq!(
            parity_of(f64::INFINITY).unwrap_err(),
            NumericError::NotFinite
        );
    }

    #[test]
    fn test_large_magnitude_floats() {
        // Beyond 2^53 every representable float is even
        assert_eq!(parity_of(2.0f64.powi(60)).unwrap(), Parity::Even);
        assert_eq!(parity_of(9_007_199_254_740_991.0).unwrap(), Parity::Odd);
    }

    #[test]
    fn test_display() {
        assert_eq!(Parity::Even.to_string(), "even");
        assert_eq!(Parity::Odd.to_string(), "odd");
    }

    #[test]
    fn test_predicates() {
        assert!(Parity::Even.is_even());
        assert!(!Parity::Even.is_odd());
        assert!(Parity::Odd.is_odd());
    }
}
