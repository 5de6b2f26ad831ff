//! Check command
//!
//! Grades a single response non-interactively.

use crate::core::{Dictionary, Round};
use crate::output::{Feedback, render};

/// Grade `response` against `word` and render the feedback
///
/// # Examples
/// ```
/// use phonetic_drill::commands::check_response;
/// use phonetic_drill::core::Dictionary;
///
/// let dictionary = Dictionary::from_rows([["a", "alfa", "alpha"], ["b", "bravo", ""]]).unwrap();
/// assert!(check_response("ab", "Alpha Bravo", &dictionary).correct);
/// assert!(!check_response("ab", "Alpha", &dictionary).correct);
/// ```
#[must_use]
pub fn check_response(word: &str, response: &str, dictionary: &Dictionary) -> Feedback {
    let round = Round::grade(word, response, dictionary);
    render(&round, dictionary)
}
