// ============================================================================
// Place-Value Rounding
// Round-half-to-even rounding at a named digit offset
// ============================================================================

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use super::errors::{NumericError, NumericResult};
use super::place::Place;

/// Round a number to a named place value.
///
/// The place name is matched case-insensitively after trimming surrounding
/// whitespace, so `" ONES "` behaves exactly like `"ones"`. Ties round
/// half-to-even (banker's rounding): when the discarded remainder is exactly
/// halfway, the result is the neighbor whose last retained digit is even.
///
/// The result is always returned as `f64`, including for integer places like
/// tens or hundreds. Finite values too large for the decimal range are
/// returned unchanged: at that magnitude every `f64` is already whole at
/// every supported place.
///
/// # Errors
/// - `NotFinite` if `number` is NaN or infinite
/// - `UnrecognizedPlace` if the name is absent from the place table
///
/// # Example
/// ```ignore
/// use utilkit::numeric::round_to_place;
///
/// assert_eq!(round_to_place(123.456, "tens")?, 120.0);
/// assert_eq!(round_to_place(123.456, "hundredths")?, 123.46);
/// assert_eq!(round_to_place(2.5, "ones")?, 2.0); // banker's rounding
/// ```
pub fn round_to_place(number: f64, place_name: &str) -> NumericResult<f64> {
    // Validate the number before touching the place name
    if !number.is_finite() {
        return Err(NumericError::NotFinite);
    }
    let place = Place::resolve(place_name)?;
    round_at(number, place)
}

/// Round a number at an already-resolved place.
///
/// Same semantics as [`round_to_place`], skipping the name lookup. Useful
/// when the same place is applied to many values.
///
/// # Errors
/// Returns `NotFinite` for NaN/infinite input.
pub fn round_at(number: f64, place: Place) -> NumericResult<f64> {
    if !number.is_finite() {
        return Err(NumericError::NotFinite);
    }

    let value = match Decimal::from_f64(number) {
        Some(value) => value,
        // Finite values beyond the decimal range (|x| > ~7.9e28) are whole
        // numbers divisible by 10^12, so rounding at any supported offset
        // leaves them unchanged.
        None => return Ok(number),
    };
    tracing::debug!("rounding {} at digit offset {}", value, place.offset());

    let rounded = if place.offset() >= 0 {
        value.round_dp_with_strategy(
            place.offset() as u32,
            RoundingStrategy::MidpointNearestEven,
        )
    } else {
        // Shift the target digit into the ones place, round there, shift back.
        let shift = Decimal::from(10_i64.pow(place.offset().unsigned_abs() as u32));
        value
            .checked_div(shift)
            .ok_or(NumericError::Overflow)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .checked_mul(shift)
            .ok_or(NumericError::Overflow)?
    };

    rounded.to_f64().ok_or(NumericError::Overflow)
}

/// Parse a numeric string and round it to a named place value.
///
/// This is the entry point for callers holding untyped text (CLI arguments,
/// JSON strings). The number is trimmed and parsed as a decimal before
/// delegating to [`round_to_place`].
///
/// # Errors
/// Returns `InvalidNumber` if the text does not parse as a number, plus
/// everything [`round_to_place`] can return.
pub fn round_str(number: &str, place_name: &str) -> NumericResult<f64> {
    let parsed: f64 = number
        .trim()
        .parse()
        .map_err(|_| NumericError::InvalidNumber(number.trim().to_string()))?;
    round_to_place(parsed, place_name)
}
