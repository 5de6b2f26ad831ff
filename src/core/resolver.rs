//! Answer resolution
//!
//! Expands a target word into the code-word sets the learner has to say.

use super::{Dictionary, PhoneticEntry};

/// Accepted code-words for each mapped letter of a word, in word order
///
/// Characters the dictionary does not map contribute nothing, so the length
/// can be shorter than the word. Align responses against this, never the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedSequence<'d> {
    letters: Vec<&'d PhoneticEntry>,
}

impl<'d> ExpectedSequence<'d> {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Accepted set at a position
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&'d PhoneticEntry> {
        self.letters.get(position).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'d PhoneticEntry> + '_ {
        self.letters.iter().copied()
    }

    /// Primary code-word for every position
    #[must_use]
    pub fn canonical(&self) -> Vec<&'d str> {
        self.letters.iter().map(|entry| entry.primary()).collect()
    }
}

/// Expand a word into its expected sequence
///
/// # Examples
/// ```
/// use phonetic_drill::core::{Dictionary, expand};
///
/// let dictionary = Dictionary::from_rows([["a", "alfa"], ["b", "bravo"]]).unwrap();
/// let expected = expand("B-a!", &dictionary);
/// assert_eq!(expected.canonical(), vec!["bravo", "alfa"]);
/// ```
#[must_use]
pub fn expand<'d>(word: &str, dictionary: &'d Dictionary) -> ExpectedSequence<'d> {
    let letters = word
        .chars()
        .flat_map(char::to_lowercase)
        .filter_map(|letter| dictionary.get(letter))
        .collect();

    ExpectedSequence { letters }
}
