// ============================================================================
// Checked Arithmetic
// Addition and subtraction helpers that refuse non-finite values
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Checked addition.
///
/// # Errors
/// Returns `NotFinite` if either operand is NaN or infinite, and `Overflow`
/// or `Underflow` if the sum leaves the finite `f64` range.
#[inline]
pub fn add(a: f64, b: f64) -> NumericResult<f64> {
    if !a.is_finite() || !b.is_finite() {
        return Err(NumericError::NotFinite);
    }
    finite_or_range_error(a + b)
}

/// Checked subtraction (`minuend - subtrahend`).
///
/// # Errors
/// Returns `NotFinite` if either operand is NaN or infinite, and `Overflow`
/// or `Underflow` if the difference leaves the finite `f64` range.
#[inline]
pub fn subtract(minuend: f64, subtrahend: f64) -> NumericResult<f64> {
    if !minuend.is_finite() || !subtrahend.is_finite() {
        return Err(NumericError::NotFinite);
    }
    finite_or_range_error(minuend - subtrahend)
}

/// Map a non-finite result of finite operands to a range error.
fn finite_or_range_error(result: f64) -> NumericResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else if result > 0.0 {
        Err(NumericError::Overflow)
    } else {
        Err(NumericError::Underflow)
    }
}
