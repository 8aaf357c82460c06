// ============================================================================
// Numeric Module
// Pure numeric helpers: place-value rounding, checked arithmetic, parity
// ============================================================================
//
// This module provides:
// - round_to_place: round-half-to-even rounding at a named digit offset
// - Place: a place name resolved against the fixed name-to-offset table
// - add/subtract: checked f64 arithmetic
// - Parity/parity_of: even/odd classification
// - NumericError: error types shared across the numeric functions
//
// Design principles:
// - Every function is pure and reentrant; the only shared state is the
//   read-only place table
// - All fallible operations return Result (no panics)
// - Ties always round half-to-even; f64's default half-away-from-zero
//   rounding is never used

mod arithmetic;
mod errors;
mod parity;
mod place;
mod rounding;

pub use arithmetic::{add, subtract};
pub use errors::{NumericError, NumericResult};
pub use parity::{parity_of, Parity};
pub use place::Place;
pub use rounding::{round_at, round_str, round_to_place};
