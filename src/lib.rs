// ============================================================================
// Utilkit Library
// Small pure utility functions for numbers and strings
// ============================================================================

//! # Utilkit
//!
//! A collection of small, independent, pure utility functions.
//!
//! ## Features
//!
//! - **Place-value rounding** with round-half-to-even (banker's) semantics:
//!   round a number to a named place like "tens" or "hundredths"
//! - **Checked arithmetic** helpers that reject non-finite values
//! - **Parity classification** for integer-valued numbers
//! - **String utilities**: palindrome/anagram predicates, reversal, word
//!   capitalization, vowel/letter counts, longest-word search
//!
//! Every function is stateless and reentrant. The only shared data is the
//! read-only place table, so all entry points are safe to call from any
//! number of threads without synchronization.
//!
//! ## Example
//!
//! ```rust
//! use utilkit::prelude::*;
//!
//! // Round-half-to-even at a named place
//! assert_eq!(round_to_place(123.456, "tens").unwrap(), 120.0);
//! assert_eq!(round_to_place(123.456, "hundredths").unwrap(), 123.46);
//! assert_eq!(round_to_place(2.5, "ones").unwrap(), 2.0);
//!
//! // String predicates
//! assert!(is_palindrome("A man, a plan, a canal: Panama"));
//! assert!(is_anagram("listen", "silent"));
//!
//! // Parity
//! assert_eq!(parity_of(4.0).unwrap(), Parity::Even);
//! ```

pub mod numeric;
pub mod text;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        add, parity_of, round_at, round_str, round_to_place, subtract, NumericError,
        NumericResult, Parity, Place,
    };
    pub use crate::text::{
        capitalize_words, count_letters, count_vowels, find_longest_word, is_anagram,
        is_palindrome, remove_spaces, reverse_string,
    };
}
