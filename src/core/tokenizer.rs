//! Response tokenization
//!
//! Turns a raw spoken or typed response into normalized code-word tokens.

use std::fmt;

/// Lazily split a raw response into normalized tokens
///
/// Tokens are whitespace separated, trimmed, lowercased and never empty.
pub fn tokens(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split_whitespace()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
}

/// Normalized tokens of one response, in the order they were given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseTokens(Vec<String>);

impl ResponseTokens {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Token at a position, if the response reached that far
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&str> {
        self.0.get(position).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ResponseTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Tokenize a raw response
///
/// # Examples
/// ```
/// use phonetic_drill::core::tokenize;
///
/// let tokens = tokenize("  Charlie\tALFA  bravo\n");
/// assert_eq!(tokens.as_slice(), &["charlie", "alfa", "bravo"]);
/// assert!(tokenize("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize(raw: &str) -> ResponseTokens {
    ResponseTokens(tokens(raw).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_and_lowercases() {
        let tokens = tokenize("Alpha Bravo CHARLIE");
        assert_eq!(tokens.as_slice(), &["alpha", "bravo", "charlie"]);
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn tokenize_ignores_extra_whitespace() {
        assert_eq!(tokenize("  alpha   bravo "), tokenize("Alpha Bravo"));
        assert_eq!(
            tokenize("\talpha\n\nbravo\r\n").as_slice(),
            &["alpha", "bravo"]
        );
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
        assert_eq!(tokenize("").get(0), None);
    }

    #[test]
    fn tokenize_keeps_punctuation_inside_tokens() {
        let tokens = tokenize("X-ray Yankee");
        assert_eq!(tokens.get(0), Some("x-ray"));
        assert_eq!(tokens.get(1), Some("yankee"));
    }

    #[test]
    fn tokens_is_lazy_and_ordered() {
        let mut iter = tokens("one two three");
        assert_eq!(iter.next().as_deref(), Some("one"));
        assert_eq!(iter.next().as_deref(), Some("two"));
    }

    #[test]
    fn display_joins_with_single_space() {
        assert_eq!(tokenize("  Delta   Echo ").to_string(), "delta echo");
    }
}
