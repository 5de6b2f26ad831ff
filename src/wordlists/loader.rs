//! Word list and alphabet loading utilities
//!
//! Provides functions to load data from files or use embedded constants.

use super::{RandomWords, WORDS, nato, usable_words};
use crate::core::{Dictionary, DictionaryError};
use anyhow::{Context, Result, bail};
use log::debug;
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Load practice words from a file
///
/// One word per line; blank lines are ignored and no header is expected.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use phonetic_drill::wordlists::loader::load_words_from_file;
///
/// let words = load_words_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    Ok(words)
}

/// Load a phonetic alphabet from a CSV file
///
/// The first row is a header; each following row is
/// `letter, primary_word [, alt_word]*`.
///
/// # Errors
///
/// Returns `DictionaryError::Csv` if the file cannot be opened or parsed,
/// and `MalformedEntry`/`DuplicateLetter` for invalid rows.
pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let file = File::open(path).map_err(csv::Error::from)?;
    Dictionary::from_csv(file)
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use phonetic_drill::wordlists::loader::words_from_slice;
/// use phonetic_drill::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Alphabet name that selects the embedded NATO alphabet
pub const BUILTIN_ALPHABET: &str = "nato";

/// Word list name that selects the embedded practice words
pub const BUILTIN_WORDS: &str = "default";

/// Load the alphabet by name: [`BUILTIN_ALPHABET`] or a CSV file path
///
/// # Errors
///
/// Fails if the file cannot be read or parsed, or if it defines no letters.
pub fn load_alphabet(alphabet: &str) -> Result<Dictionary> {
    let dictionary = if alphabet == BUILTIN_ALPHABET {
        nato().context("built-in NATO alphabet is invalid")?
    } else {
        load_dictionary_from_file(alphabet)
            .with_context(|| format!("failed to load alphabet from '{alphabet}'"))?
    };

    if dictionary.is_empty() {
        bail!("alphabet '{alphabet}' has no letters");
    }

    debug!("loaded alphabet '{alphabet}' with {} letters", dictionary.len());
    Ok(dictionary)
}

/// Load practice words by name ([`BUILTIN_WORDS`] or a file path), keeping
/// only words the dictionary can spell
///
/// # Errors
///
/// Fails if the file cannot be read or if no word survives filtering.
pub fn load_word_source(
    words: &str,
    seed: Option<u64>,
    dictionary: &Dictionary,
) -> Result<RandomWords> {
    let all_words = if words == BUILTIN_WORDS {
        words_from_slice(WORDS)
    } else {
        load_words_from_file(words)
            .with_context(|| format!("failed to load word list from '{words}'"))?
    };

    let usable = usable_words(all_words, dictionary);
    if usable.is_empty() {
        bail!("word list '{words}' has no words the alphabet can spell");
    }
    debug!("loaded {} practice words from '{words}'", usable.len());

    Ok(match seed {
        Some(seed) => RandomWords::seeded(usable, seed),
        None => RandomWords::from_os_rng(usable),
    })
}
