// ============================================================================
// String Counters
// Vowel and letter counts, longest-word search
// ============================================================================

/// Count the vowels (a, e, i, o, u) in a string, case-insensitively.
///
/// # Example
/// ```ignore
/// use utilkit::text::count_vowels;
///
/// assert_eq!(count_vowels("Hello World"), 3);
/// assert_eq!(count_vowels("rhythm"), 0);
/// ```
pub fn count_vowels(s: &str) -> usize {
    s.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

/// Count the alphabetic characters in a string.
///
/// Digits, whitespace, punctuation, and symbols are skipped.
pub fn count_letters(s: &str) -> usize {
    s.chars().filter(|c| c.is_alphabetic()).count()
}

/// Find the longest whitespace-delimited word in a string.
///
/// On ties the first word wins. Length is measured in characters, not bytes.
/// Returns `None` when the string contains no words.
///
/// # Example
/// ```ignore
/// use utilkit::text::find_longest_word;
///
/// assert_eq!(find_longest_word("the quick brown fox"), Some("quick"));
/// assert_eq!(find_longest_word("   "), None);
/// ```
pub fn find_longest_word(text: &str) -> Option<&str> {
    let mut longest: Option<&str> = None;
    let mut longest_len = 0;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if len > longest_len {
            longest = Some(word);
            longest_len = len;
        }
    }

    longest
}
