//! Feedback rendering
//!
//! Turns a graded round into display text. Pure formatting: nothing here
//! decides correctness or touches the dictionary beyond reading it.

use crate::core::{Actual, Dictionary, ExpectedSequence, Mismatch, PhoneticEntry, Round};
use std::fmt;

/// Message shown for a correct round
pub const CORRECT_MESSAGE: &str = "CONGRATS! Every letter was spelled correctly.";

/// Message headline for an incorrect round
pub const INCORRECT_MESSAGE: &str = "Incorrect.";

/// Placeholder for a position the response never reached
pub const NOTHING_ENTERED: &str = "<nothing entered>";

/// One line of the vertical canonical answer
///
/// The initial is kept apart so it can be highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerLine {
    pub letter: char,
    /// Upper-cased first character of the primary code-word
    pub initial: String,
    /// Remainder of the primary code-word
    pub rest: String,
}

impl AnswerLine {
    #[must_use]
    pub fn from_entry(entry: &PhoneticEntry) -> Self {
        let mut chars = entry.primary().chars();
        let initial = chars
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();

        Self {
            letter: entry.letter(),
            initial,
            rest: chars.collect(),
        }
    }
}

impl fmt::Display for AnswerLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.initial, self.rest)
    }
}

/// Vertical canonical answer for an expected sequence
#[must_use]
pub fn answer_lines(expected: &ExpectedSequence<'_>) -> Vec<AnswerLine> {
    expected.iter().map(AnswerLine::from_entry).collect()
}

/// Rendered outcome of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub headline: String,
    /// Explanatory lines, in display order
    pub details: Vec<String>,
    /// Canonical answer, empty for a correct round
    pub answer: Vec<AnswerLine>,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline)?;
        for line in &self.details {
            writeln!(f, "{line}")?;
        }
        if !self.answer.is_empty() {
            writeln!(f)?;
            for line in &self.answer {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Render a graded round
///
/// # Examples
/// ```
/// use phonetic_drill::core::{Dictionary, Round};
/// use phonetic_drill::output::feedback::{CORRECT_MESSAGE, render};
///
/// let dictionary = Dictionary::from_rows([["n", "november"], ["o", "oscar"]]).unwrap();
/// let round = Round::grade("no", "november oscar", &dictionary);
/// assert_eq!(render(&round, &dictionary).headline, CORRECT_MESSAGE);
/// ```
#[must_use]
pub fn render(round: &Round<'_>, dictionary: &Dictionary) -> Feedback {
    if round.is_correct() {
        return Feedback {
            correct: true,
            headline: CORRECT_MESSAGE.to_string(),
            details: Vec::new(),
            answer: Vec::new(),
        };
    }

    let expected = round.expected();
    let mut details = Vec::new();

    let entered = if round.tokens().is_empty() {
        NOTHING_ENTERED.to_string()
    } else {
        format!("`{}`", round.response())
    };
    details.push(format!("You entered:    {entered}"));
    details.push(format!("Correct answer: `{}`", expected.canonical().join(" ")));

    let mismatches = round.verdict().mismatches();
    for mismatch in mismatches {
        details.push(mismatch_line(mismatch, dictionary));
    }

    if mismatches.is_empty() {
        details.push(format!(
            "Expected {} code-words, got {}.",
            expected.len(),
            round.tokens().len()
        ));
    }

    let extra = round.extra_tokens();
    if !extra.is_empty() {
        details.push(format!("Unexpected extra input: `{}`", extra.join(" ")));
    }

    Feedback {
        correct: false,
        headline: INCORRECT_MESSAGE.to_string(),
        details,
        answer: answer_lines(expected),
    }
}

/// "Letter 2 (A): expected one of {alfa, alpha}, got 'zulu'"
fn mismatch_line(mismatch: &Mismatch<'_>, dictionary: &Dictionary) -> String {
    let expected = mismatch.expected;
    let accepted = format!("{{{}}}", expected.words().join(", "));

    let got = match &mismatch.actual {
        Actual::Missing => NOTHING_ENTERED.to_string(),
        Actual::Token(token) => match dictionary.letter_for(token) {
            Some(letter) => format!("'{token}' ('{token}' spells '{letter}')"),
            None => format!("'{token}'"),
        },
    };

    format!(
        "Letter {} ({}): expected one of {accepted}, got {got}",
        mismatch.position + 1,
        expected.letter().to_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Dictionary {
        Dictionary::from_rows([
            vec!["a", "alpha", "alfa"],
            vec!["b", "bravo"],
            vec!["c", "charlie"],
            vec!["x", "x-ray", "xray"],
            vec!["z", "zulu"],
        ])
        .unwrap()
    }

    #[test]
    fn correct_round_has_fixed_message() {
        let dictionary = abc();
        let feedback = render(&Round::grade("cab", "charlie alfa bravo", &dictionary), &dictionary);

        assert!(feedback.correct);
        assert_eq!(feedback.headline, CORRECT_MESSAGE);
        assert!(feedback.details.is_empty());
        assert!(feedback.answer.is_empty());
    }

    #[test]
    fn substitution_names_expected_set_and_actual() {
        let dictionary = abc();
        let feedback = render(&Round::grade("cab", "charlie zulu bravo", &dictionary), &dictionary);

        assert!(!feedback.correct);
        assert_eq!(feedback.headline, INCORRECT_MESSAGE);
        assert!(feedback.details.contains(
            &"Letter 2 (A): expected one of {alpha, alfa}, got 'zulu' ('zulu' spells 'z')"
                .to_string()
        ));
    }

    #[test]
    fn unknown_token_has_no_hint() {
        let dictionary = abc();
        let feedback = render(&Round::grade("ab", "alpha bingo", &dictionary), &dictionary);

        assert!(feedback.details.contains(
            &"Letter 2 (B): expected one of {bravo}, got 'bingo'".to_string()
        ));
    }

    #[test]
    fn missing_position_says_nothing_entered() {
        let dictionary = abc();
        let feedback = render(&Round::grade("cab", "charlie alpha", &dictionary), &dictionary);

        assert!(feedback.details.contains(
            &"Letter 3 (B): expected one of {bravo}, got <nothing entered>".to_string()
        ));
    }

    #[test]
    fn response_is_echoed_as_typed() {
        let dictionary = abc();
        let feedback = render(&Round::grade("ab", "Alpha   ZULU", &dictionary), &dictionary);
        assert_eq!(feedback.details[0], "You entered:    `Alpha   ZULU`");
    }

    #[test]
    fn empty_response_is_echoed_as_nothing() {
        let dictionary = abc();
        let feedback = render(&Round::grade("ab", "   ", &dictionary), &dictionary);
        assert_eq!(feedback.details[0], "You entered:    <nothing entered>");
        assert_eq!(feedback.details[1], "Correct answer: `alpha bravo`");
    }

    #[test]
    fn extra_input_is_flagged() {
        let dictionary = abc();
        let feedback = render(
            &Round::grade("ab", "alpha bravo charlie zulu", &dictionary),
            &dictionary,
        );

        assert!(!feedback.correct);
        assert!(feedback
            .details
            .contains(&"Expected 2 code-words, got 4.".to_string()));
        assert!(feedback
            .details
            .contains(&"Unexpected extra input: `charlie zulu`".to_string()));
    }

    #[test]
    fn extra_input_flagged_alongside_mismatches() {
        let dictionary = abc();
        let feedback = render(&Round::grade("ab", "alpha zulu charlie", &dictionary), &dictionary);

        assert!(feedback.details.iter().any(|d| d.starts_with("Letter 2 (B)")));
        assert!(!feedback.details.iter().any(|d| d.starts_with("Expected ")));
        assert!(feedback
            .details
            .contains(&"Unexpected extra input: `charlie`".to_string()));
    }

    #[test]
    fn answer_is_vertical_with_capital_initials() {
        let dictionary = abc();
        let feedback = render(&Round::grade("x-cab", "zulu", &dictionary), &dictionary);

        let shown: Vec<String> = feedback.answer.iter().map(ToString::to_string).collect();
        assert_eq!(shown, vec!["X-ray", "Charlie", "Alpha", "Bravo"]);
        assert_eq!(feedback.answer[0].initial, "X");
        assert_eq!(feedback.answer[0].rest, "-ray");
        assert_eq!(feedback.answer[0].letter, 'x');
    }

    #[test]
    fn display_lists_answer_one_per_line() {
        let dictionary = abc();
        let text = render(&Round::grade("ab", "alpha", &dictionary), &dictionary).to_string();

        assert!(text.starts_with("Incorrect.\n"));
        assert!(text.ends_with("\nAlpha\nBravo\n"));
    }

    #[test]
    fn rendering_does_not_change_the_round() {
        let dictionary = abc();
        let round = Round::grade("cab", "charlie zulu", &dictionary);
        let before = round.verdict().clone();

        let first = render(&round, &dictionary);
        let second = render(&round, &dictionary);

        assert_eq!(first, second);
        assert_eq!(round.verdict(), &before);
    }
}
