//! Exact palindrome check.

/// True if `text` reads the same forwards and backwards.
///
/// Comparison is over Unicode scalar values and is case-sensitive; whitespace
/// and punctuation are significant.
pub fn is_palindrome(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}
