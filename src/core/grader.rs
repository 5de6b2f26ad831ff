//! Response grading
//!
//! Compares response tokens against the expected sequence position by position.
//!
//! # Algorithm
//! 1. Equal lengths and every token accepted at its position: `Correct`
//! 2. Otherwise walk the expected positions in order:
//!    - response exhausted: record `Missing` and stop
//!    - token not accepted: record the token and keep going
//! 3. Tokens past the end of the expected sequence are never mismatches.
//!    A longer response with every compared position right is still
//!    `Incorrect`, with no mismatches.

use super::{ExpectedSequence, PhoneticEntry, ResponseTokens};

/// What the learner gave at a mismatched position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actual {
    /// A token that is not an accepted spelling for the position
    Token(String),
    /// The response ended before this position
    Missing,
}

/// One wrong position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch<'d> {
    /// Zero-based position in the expected sequence
    pub position: usize,
    pub expected: &'d PhoneticEntry,
    pub actual: Actual,
}

/// Outcome of grading a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<'d> {
    Correct,
    Incorrect(Vec<Mismatch<'d>>),
}

impl<'d> Verdict<'d> {
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Recorded mismatches (empty when correct)
    #[must_use]
    pub fn mismatches(&self) -> &[Mismatch<'d>] {
        match self {
            Self::Correct => &[],
            Self::Incorrect(mismatches) => mismatches,
        }
    }
}

/// Grade normalized response tokens against an expected sequence
///
/// Total over its inputs: always returns a verdict.
///
/// # Examples
/// ```
/// use phonetic_drill::core::{Dictionary, expand, grade, tokenize};
///
/// let dictionary = Dictionary::from_rows([["a", "alpha", "alfa"], ["b", "bravo", ""]]).unwrap();
/// let expected = expand("ab", &dictionary);
///
/// assert!(grade(&tokenize("Alfa BRAVO"), &expected).is_correct());
/// assert_eq!(grade(&tokenize("alpha"), &expected).mismatches().len(), 1);
/// ```
#[must_use]
pub fn grade<'d>(tokens: &ResponseTokens, expected: &ExpectedSequence<'d>) -> Verdict<'d> {
    if tokens.len() == expected.len()
        && expected
            .iter()
            .zip(tokens.as_slice())
            .all(|(entry, token)| entry.accepts(token))
    {
        return Verdict::Correct;
    }

    let mut mismatches = Vec::new();
    for (position, entry) in expected.iter().enumerate() {
        let Some(token) = tokens.get(position) else {
            mismatches.push(Mismatch {
                position,
                expected: entry,
                actual: Actual::Missing,
            });
            break;
        };

        if !entry.accepts(token) {
            mismatches.push(Mismatch {
                position,
                expected: entry,
                actual: Actual::Token(token.to_string()),
            });
        }
    }

    Verdict::Incorrect(mismatches)
}
