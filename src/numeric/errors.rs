// ============================================================================
// Numeric Errors
// Error types for the numeric utility functions
// ============================================================================

use std::fmt;

use super::place;

/// Errors that can occur in the numeric utility functions.
///
/// None of these are recoverable internally; they always propagate to the
/// caller unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericError {
    /// Input value is NaN or infinite
    NotFinite,
    /// Result exceeded the representable range
    Overflow,
    /// Result below the representable range
    Underflow,
    /// Input string could not be parsed as a number
    InvalidNumber(String),
    /// Parity requested for a value with a non-zero fractional part
    NonIntegerParity(f64),
    /// Place name not present in the place table
    UnrecognizedPlace(String),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NotFinite => write!(f, "value is not a finite number"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::InvalidNumber(input) => {
                write!(f, "invalid number: could not parse '{}'", input)
            },
            NumericError::NonIntegerParity(value) => {
                write!(f, "parity is undefined for non-integer value: {}", value)
            },
            NumericError::UnrecognizedPlace(name) => {
                let supported: Vec<&str> = place::names().collect();
                write!(
                    f,
                    "unrecognized rounding place: '{}'. Supported places are: {}",
                    name,
                    supported.join(", ")
                )
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
