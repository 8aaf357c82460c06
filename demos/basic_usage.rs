// ============================================================================
// Basic Usage Example
// ============================================================================

use utilkit::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Utilkit Example ===\n");

    // Place-value rounding with banker's semantics
    println!("Rounding 123.456:");
    for name in ["tens", "ones", "tenths", "hundredths"] {
        match round_to_place(123.456, name) {
            Ok(rounded) => println!("  to {:<10} -> {}", name, rounded),
            Err(e) => println!("  to {:<10} -> error: {}", name, e),
        }
    }

    println!("\nTies round half-to-even:");
    println!("  2.5 to ones -> {}", round_to_place(2.5, "ones").unwrap());
    println!("  3.5 to ones -> {}", round_to_place(3.5, "ones").unwrap());

    // Unrecognized names list the supported places
    println!("\nUnrecognized place:");
    if let Err(e) = round_to_place(5.0, "parsecs") {
        println!("  {}", e);
    }

    // Arithmetic and parity
    let sum = add(40.0, 2.0).unwrap();
    println!("\n40 + 2 = {} ({})", sum, parity_of(sum).unwrap());

    // String utilities
    let phrase = "A man, a plan, a canal: Panama";
    println!("\n\"{}\"", phrase);
    println!("  palindrome:   {}", is_palindrome(phrase));
    println!("  vowels:       {}", count_vowels(phrase));
    println!("  letters:      {}", count_letters(phrase));
    println!("  longest word: {:?}", find_longest_word(phrase));
    println!("  capitalized:  {}", capitalize_words(phrase));
}
