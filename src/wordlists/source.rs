//! Word sources
//!
//! Provide the next word to quiz on.

use crate::core::{Dictionary, expand};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Something that hands out quiz words
pub trait WordSource {
    /// Next word to quiz on, or `None` when no words are available
    fn next_word(&mut self) -> Option<&str>;
}

/// Picks uniformly at random (with replacement) from a fixed list
#[derive(Debug)]
pub struct RandomWords {
    words: Vec<String>,
    rng: StdRng,
}

impl RandomWords {
    #[must_use]
    pub const fn new(words: Vec<String>, rng: StdRng) -> Self {
        Self { words, rng }
    }

    /// Reproducible word order for a given seed
    #[must_use]
    pub fn seeded(words: Vec<String>, seed: u64) -> Self {
        Self::new(words, StdRng::seed_from_u64(seed))
    }

    /// Word order seeded from the operating system
    #[must_use]
    pub fn from_os_rng(words: Vec<String>) -> Self {
        Self::new(words, StdRng::from_os_rng())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for RandomWords {
    fn next_word(&mut self) -> Option<&str> {
        self.words.choose(&mut self.rng).map(String::as_str)
    }
}

/// Keep only words with at least one letter the dictionary can spell
///
/// Dropped words are logged; they would produce an empty expected sequence.
#[must_use]
pub fn usable_words(words: Vec<String>, dictionary: &Dictionary) -> Vec<String> {
    words
        .into_iter()
        .filter(|word| {
            let usable = !expand(word, dictionary).is_empty();
            if !usable {
                warn!("skipping '{word}': no letters covered by the alphabet");
            }
            usable
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn random_words_picks_from_list() {
        let list = words(&["radar", "tango", "kilo"]);
        let mut source = RandomWords::seeded(list.clone(), 7);

        for _ in 0..20 {
            let word = source.next_word().unwrap();
            assert!(list.iter().any(|w| w == word));
        }
    }

    #[test]
    fn random_words_same_seed_same_order() {
        let list = words(&["radar", "tango", "kilo", "delta", "echo"]);
        let mut first = RandomWords::seeded(list.clone(), 42);
        let mut second = RandomWords::seeded(list, 42);

        for _ in 0..10 {
            assert_eq!(
                first.next_word().map(str::to_string),
                second.next_word().map(str::to_string)
            );
        }
    }

    #[test]
    fn random_words_empty_list() {
        let mut source = RandomWords::seeded(Vec::new(), 1);
        assert!(source.is_empty());
        assert_eq!(source.next_word(), None);
    }

    #[test]
    fn usable_words_drops_unspellable_entries() {
        let dictionary = Dictionary::from_rows([vec!["a", "alfa"], vec!["b", "bravo"]]).unwrap();
        let kept = usable_words(words(&["ab", "123", "", "xyz", "b-52"]), &dictionary);
        assert_eq!(kept, vec!["ab", "b-52"]);
    }
}
