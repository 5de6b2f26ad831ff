//! A single quiz round
//!
//! Ties the pure pieces together: expand the word, tokenize the response,
//! grade. A round is built, shown and then thrown away.

use super::{Dictionary, ExpectedSequence, ResponseTokens, Verdict, expand, grade, tokenize};

/// One graded round
#[derive(Debug, Clone)]
pub struct Round<'d> {
    word: String,
    response: String,
    expected: ExpectedSequence<'d>,
    tokens: ResponseTokens,
    verdict: Verdict<'d>,
}

impl<'d> Round<'d> {
    /// Grade a raw response to a target word
    ///
    /// # Examples
    /// ```
    /// use phonetic_drill::core::{Dictionary, Round};
    ///
    /// let dictionary = Dictionary::from_rows([["o", "oscar"], ["k", "kilo"]]).unwrap();
    /// let round = Round::grade("OK", "Oscar Kilo", &dictionary);
    /// assert!(round.is_correct());
    /// ```
    #[must_use]
    pub fn grade(word: &str, response: &str, dictionary: &'d Dictionary) -> Self {
        let expected = expand(word, dictionary);
        let tokens = tokenize(response);
        let verdict = grade(&tokens, &expected);

        Self {
            word: word.to_string(),
            response: response.to_string(),
            expected,
            tokens,
            verdict,
        }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The response exactly as the learner gave it
    #[inline]
    #[must_use]
    pub fn response(&self) -> &str {
        &self.response
    }

    #[inline]
    #[must_use]
    pub const fn expected(&self) -> &ExpectedSequence<'d> {
        &self.expected
    }

    #[inline]
    #[must_use]
    pub const fn tokens(&self) -> &ResponseTokens {
        &self.tokens
    }

    #[inline]
    #[must_use]
    pub const fn verdict(&self) -> &Verdict<'d> {
        &self.verdict
    }

    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.verdict.is_correct()
    }

    /// Tokens given beyond the end of the expected sequence
    #[must_use]
    pub fn extra_tokens(&self) -> &[String] {
        self.tokens
            .as_slice()
            .get(self.expected.len()..)
            .unwrap_or_default()
    }
}

/// In-memory tally for one drill session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds: usize,
    pub correct: usize,
    pub skipped: usize,
}

impl SessionStats {
    /// Count a graded round
    pub fn record(&mut self, round: &Round<'_>) {
        self.rounds += 1;
        if round.is_correct() {
            self.correct += 1;
        }
    }

    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    /// Percentage of graded rounds answered correctly
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.correct as f64 / self.rounds as f64 * 100.0
        }
    }
}
