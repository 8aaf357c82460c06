// ============================================================================
// String Transformations
// Reversal, word capitalization, space removal
// ============================================================================

/// Reverse a string character by character.
///
/// # Example
/// ```ignore
/// use utilkit::text::reverse_string;
///
/// assert_eq!(reverse_string("hello"), "olleh");
/// ```
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Capitalize the first letter of each whitespace-delimited word.
///
/// The first character of every word is uppercased and the remaining
/// characters are lowercased. Whitespace runs are preserved as-is.
///
/// # Example
/// ```ignore
/// use utilkit::text::capitalize_words;
///
/// assert_eq!(capitalize_words("hello world"), "Hello World");
/// assert_eq!(capitalize_words("rUST is FUN"), "Rust Is Fun");
/// ```
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Remove all space characters from a string.
///
/// Only the space character `' '` is removed; tabs and newlines are kept.
pub fn remove_spaces(s: &str) -> String {
    s.chars().filter(|&c| c != ' ').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_string() {
        assert_eq!(reverse_string("hello"), "olleh");
        assert_eq!(reverse_string(""), "");
        assert_eq!(reverse_string("a"), "a");
        assert_eq!(reverse_string("hello world"), "dlrow olleh");
        assert_eq!(reverse_string(" a b c "), " c b a ");
        assert_eq!(reverse_string("test!123"), "321!tset");
        assert_eq!(reverse_string("HeLlO"), "OlLeH");
    }

    #[test]
    fn test_reverse_string_palindrome_is_fixed_point() {
        assert_eq!(reverse_string("madam"), "madam");
        assert_eq!(reverse_string("racecar"), "racecar");
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("hello world"), "Hello World");
        assert_eq!(capitalize_words("rUST is FUN"), "Rust Is Fun");
        assert_eq!(capitalize_words("single"), "Single");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_capitalize_words_preserves_whitespace() {
        assert_eq!(capitalize_words("  two  spaces  "), "  Two  Spaces  ");
        assert_eq!(capitalize_words("tab\there"), "Tab\tHere");
    }

    #[test]
    fn test_capitalize_words_non_letter_word_starts() {
        // Word-initial digits and punctuation have no uppercase form
        assert_eq!(capitalize_words("3rd place"), "3rd Place");
        assert_eq!(capitalize_words("'quoted' text"), "'quoted' Text");
    }

    #[test]
    fn test_remove_spaces() {
        assert_eq!(remove_spaces("hello world"), "helloworld");
        assert_eq!(remove_spaces("  a b c  "), "abc");
        assert_eq!(remove_spaces("nospaces"), "nospaces");
        assert_eq!(remove_spaces(""), "");
    }

    #[test]
    fn test_remove_spaces_keeps_other_whitespace() {
        assert_eq!(remove_spaces("a\tb \nc"), "a\tb\nc");
    }
}
