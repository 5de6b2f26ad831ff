//! Word lists and phonetic alphabets
//!
//! Provides the embedded NATO alphabet and practice words compiled into the
//! binary, file loaders for custom data, and word sources for the drill.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{NATO_CSV, WORDS, WORDS_COUNT};
pub use loader::{BUILTIN_ALPHABET, BUILTIN_WORDS, load_alphabet, load_word_source};
pub use source::{RandomWords, WordSource, usable_words};

use crate::core::{Dictionary, DictionaryError};

/// Build the embedded NATO alphabet
///
/// # Errors
///
/// Only fails if the compiled-in alphabet data is invalid.
pub fn nato() -> Result<Dictionary, DictionaryError> {
    Dictionary::from_csv(NATO_CSV.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::expand;

    #[test]
    fn nato_matches_alphabet_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/alphabet.csv");
        let from_file = Dictionary::from_csv(std::fs::File::open(path).unwrap()).unwrap();
        assert_eq!(nato().unwrap(), from_file);
    }

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn nato_covers_the_latin_alphabet() {
        let dictionary = nato().unwrap();
        assert_eq!(dictionary.len(), 26);
        for letter in 'a'..='z' {
            assert!(dictionary.get(letter).is_some(), "missing '{letter}'");
        }
    }

    #[test]
    fn nato_accepts_common_variants() {
        let dictionary = nato().unwrap();
        let a = dictionary.get('a').unwrap();
        assert_eq!(a.primary(), "alfa");
        assert!(a.accepts("alpha"));
        assert!(dictionary.get('j').unwrap().accepts("juliet"));
        assert!(dictionary.get('x').unwrap().accepts("x-ray"));
        assert!(dictionary.get('x').unwrap().accepts("xray"));
    }

    #[test]
    fn every_embedded_word_is_spellable() {
        let dictionary = nato().unwrap();
        for &word in WORDS {
            assert!(!word.is_empty());
            assert_eq!(
                expand(word, &dictionary).len(),
                word.chars().filter(char::is_ascii_alphabetic).count(),
                "word '{word}'"
            );
        }
    }
}
