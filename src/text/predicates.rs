// ============================================================================
// String Predicates
// Palindrome and anagram checks
// ============================================================================

/// Check whether a string is a palindrome.
///
/// Capitalization, spaces, and punctuation are ignored: the text is
/// lowercased and stripped of every non-alphanumeric character before the
/// comparison. An empty string, or one containing no alphanumeric
/// characters, counts as a palindrome.
///
/// # Example
/// ```ignore
/// use utilkit::text::is_palindrome;
///
/// assert!(is_palindrome("madam"));
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!is_palindrome("hello"));
/// ```
pub fn is_palindrome(text: &str) -> bool {
    // Lowercase first: expansions like 'İ' -> "i\u{307}" shed their
    // combining marks in the filter
    let cleaned: Vec<char> = text
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect();

    cleaned.iter().eq(cleaned.iter().rev())
}

/// Check whether two strings are anagrams of each other.
///
/// Case is ignored and non-alphabetic characters (spaces, digits,
/// punctuation) do not participate in the comparison.
///
/// # Example
/// ```ignore
/// use utilkit::text::is_anagram;
///
/// assert!(is_anagram("listen", "silent"));
/// assert!(is_anagram("Dormitory", "dirty room"));
/// assert!(!is_anagram("hello", "world"));
/// ```
pub fn is_anagram(a: &str, b: &str) -> bool {
    sorted_letters(a) == sorted_letters(b)
}

fn sorted_letters(s: &str) -> Vec<char> {
    let mut letters: Vec<char> = s
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic())
        .collect();
    letters.sort_unstable();
    letters
}
