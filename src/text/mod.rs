// ============================================================================
// Text Module
// Pure string predicates, transformations, and counters
// ============================================================================
//
// This module provides:
// - Predicates: is_palindrome, is_anagram
// - Transformations: reverse_string, capitalize_words, remove_spaces
// - Counters: count_vowels, count_letters, find_longest_word
//
// All functions take &str and are infallible. Character-level operations use
// Unicode semantics (char boundaries, not bytes).

mod metrics;
mod predicates;
mod transform;

pub use metrics::{count_letters, count_vowels, find_longest_word};
pub use predicates::{is_anagram, is_palindrome};
pub use transform::{capitalize_words, remove_spaces, reverse_string};
