//! Phonetic dictionary
//!
//! Maps single letters to the ordered list of code-words accepted for them.
//! The first code-word of every entry is the primary spelling used for display.

use rustc_hash::FxHashMap;
use std::io;
use thiserror::Error;

/// One letter and the code-words accepted for it
///
/// Code-words are stored lowercased and deduplicated, primary spelling first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticEntry {
    letter: char,
    words: Vec<String>,
}

impl PhoneticEntry {
    /// The letter this entry spells
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    /// All accepted code-words, primary first
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The primary (canonical) code-word
    #[inline]
    #[must_use]
    pub fn primary(&self) -> &str {
        // Entries are never built with an empty word list
        &self.words[0]
    }

    /// Check whether a token is one of the accepted spellings
    ///
    /// Case and surrounding whitespace are ignored.
    #[must_use]
    pub fn accepts(&self, token: &str) -> bool {
        let token = token.trim().to_lowercase();
        self.words.iter().any(|word| *word == token)
    }
}

/// Errors raised while building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("malformed alphabet entry on row {row}: {reason}")]
    MalformedEntry { row: usize, reason: String },

    #[error("letter '{letter}' is listed more than once (again on row {row})")]
    DuplicateLetter { letter: char, row: usize },

    #[error("failed to read alphabet data: {0}")]
    Csv(#[from] csv::Error),
}

/// Immutable letter → code-word mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: FxHashMap<char, PhoneticEntry>,
}

impl Dictionary {
    /// Build a dictionary from data rows (header already removed)
    ///
    /// Each row is `letter, primary_word [, alt_word]*`. Rows are numbered from 1
    /// in error messages. Empty cells are ignored, so ragged rows are fine.
    ///
    /// # Errors
    /// - `MalformedEntry` if the letter cell is not a single character, a row has
    ///   no code-words, or a code-word contains whitespace
    /// - `DuplicateLetter` if a letter appears on more than one row
    ///
    /// # Examples
    /// ```
    /// use phonetic_drill::core::Dictionary;
    ///
    /// let dictionary =
    ///     Dictionary::from_rows([["A", "Alfa", "Alpha"], ["B", "Bravo", ""]]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.get('a').unwrap().accepts("ALPHA"));
    /// ```
    pub fn from_rows<I, R, S>(rows: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut entries: FxHashMap<char, PhoneticEntry> = FxHashMap::default();

        for (index, row) in rows.into_iter().enumerate() {
            let row_number = index + 1;
            let cells = row.as_ref();

            let Some((letter_cell, word_cells)) = cells.split_first() else {
                return Err(malformed(row_number, "row is empty"));
            };

            let letter = parse_letter(letter_cell.as_ref()).ok_or_else(|| {
                malformed(
                    row_number,
                    &format!(
                        "expected a single letter, found '{}'",
                        letter_cell.as_ref().trim()
                    ),
                )
            })?;

            let mut words: Vec<String> = Vec::with_capacity(word_cells.len());
            for cell in word_cells {
                let word = cell.as_ref().trim().to_lowercase();
                if word.is_empty() {
                    continue;
                }
                if word.contains(char::is_whitespace) {
                    return Err(malformed(
                        row_number,
                        &format!("code-word '{word}' for '{letter}' contains whitespace"),
                    ));
                }
                if !words.contains(&word) {
                    words.push(word);
                }
            }

            if words.is_empty() {
                return Err(malformed(
                    row_number,
                    &format!("no accepted code-words for '{letter}'"),
                ));
            }

            if entries.contains_key(&letter) {
                return Err(DictionaryError::DuplicateLetter {
                    letter,
                    row: row_number,
                });
            }

            entries.insert(letter, PhoneticEntry { letter, words });
        }

        Ok(Self { entries })
    }

    /// Build a dictionary from CSV text whose first row is a header
    ///
    /// # Errors
    /// Returns `Csv` for unreadable input, otherwise the same errors as [`Self::from_rows`].
    pub fn from_csv<R: io::Read>(reader: R) -> Result<Self, DictionaryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let rows = csv_reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_owned).collect::<Vec<String>>()))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }

    /// Look up the entry for a letter
    ///
    /// Upper-case letters are folded to lower case. Absence is a normal outcome
    /// for digits, punctuation and anything else the alphabet does not cover.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<&PhoneticEntry> {
        self.entries.get(&letter).or_else(|| {
            let mut lower = letter.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(folded), None) if folded != letter => self.entries.get(&folded),
                _ => None,
            }
        })
    }

    /// Find the letter a code-word spells, if any
    ///
    /// When two letters share a spelling the alphabetically first one wins.
    #[must_use]
    pub fn letter_for(&self, token: &str) -> Option<char> {
        self.entries
            .values()
            .filter(|entry| entry.accepts(token))
            .map(PhoneticEntry::letter)
            .min()
    }

    /// All entries sorted by letter
    #[must_use]
    pub fn entries(&self) -> Vec<&PhoneticEntry> {
        let mut entries: Vec<&PhoneticEntry> = self.entries.values().collect();
        entries.sort_by_key(|entry| entry.letter);
        entries
    }

    /// Number of mapped letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn malformed(row: usize, reason: &str) -> DictionaryError {
    DictionaryError::MalformedEntry {
        row,
        reason: reason.to_string(),
    }
}

/// Parse a letter cell: exactly one character after trimming and lowercasing
fn parse_letter(cell: &str) -> Option<char> {
    let mut chars = cell.trim().chars().flat_map(char::to_lowercase);
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}
