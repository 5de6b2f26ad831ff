//! Spell command
//!
//! Shows the phonetic spelling of a word without quizzing.

use crate::core::{Dictionary, expand};
use crate::output::AnswerLine;
use crate::output::feedback::answer_lines;

/// Phonetic spelling of one word
pub struct Spelling {
    pub word: String,
    /// One code-word per mapped letter, in word order
    pub lines: Vec<AnswerLine>,
    /// Characters the alphabet does not cover, in word order
    pub unmapped: Vec<char>,
}

/// Spell a word with the loaded alphabet
#[must_use]
pub fn spell_word(word: &str, dictionary: &Dictionary) -> Spelling {
    let unmapped = word
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter(|&c| c.to_lowercase().all(|lower| dictionary.get(lower).is_none()))
        .collect();

    Spelling {
        word: word.to_string(),
        lines: answer_lines(&expand(word, dictionary)),
        unmapped,
    }
}
