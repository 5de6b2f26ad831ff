//! Line-based drill mode
//!
//! Repeats rounds until the learner quits or input runs out:
//! pick a word, acquire a response, grade it, print feedback.

use crate::core::{Dictionary, Round, SessionStats};
use crate::input::Acquirer;
use crate::output::{print_challenge, print_feedback, render};
use crate::wordlists::WordSource;
use anyhow::{Context, Result, bail};
use log::{debug, info};
use std::io::{BufRead, Write};

/// Options for a drill session
#[derive(Debug, Clone, Default)]
pub struct DrillConfig {
    /// Stop after this many graded rounds
    pub max_rounds: Option<usize>,
}

/// What the learner asked for instead of answering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    Skip,
}

fn parse_command(response: &str) -> Option<Command> {
    match response.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Some(Command::Quit),
        "skip" => Some(Command::Skip),
        _ => None,
    }
}

/// Run the drill loop
///
/// Rounds are strictly sequential. Voice failures are handled inside the
/// acquirer, so only terminal I/O errors end the session early.
///
/// # Errors
///
/// Returns an error if the word source is empty or reading input fails.
pub fn run_drill<S, R, W>(
    dictionary: &Dictionary,
    words: &mut S,
    acquirer: &mut Acquirer<R, W>,
    config: &DrillConfig,
) -> Result<SessionStats>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Phonetic Alphabet Drill                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    if acquirer.has_voice() {
        println!("Say the code-word for each letter of the word shown.");
        println!("If speech recognition fails you can type the answer instead.");
    } else {
        println!("Type the code-word for each letter of the word shown, separated by spaces.");
    }
    println!("Commands: 'skip' for a new word, 'quit' to exit\n");

    info!("drill started (voice: {})", acquirer.has_voice());
    let mut stats = SessionStats::default();

    loop {
        if config.max_rounds.is_some_and(|max| stats.rounds >= max) {
            break;
        }

        let Some(word) = words.next_word() else {
            bail!("no words available to drill");
        };
        let word = word.to_string();

        print_challenge(&word);
        let Some(response) = acquirer
            .acquire(&word)
            .context("failed to read response")?
        else {
            println!();
            break;
        };

        match parse_command(&response) {
            Some(Command::Quit) => break,
            Some(Command::Skip) => {
                stats.skip();
                continue;
            }
            None => {}
        }

        let round = Round::grade(&word, &response, dictionary);
        debug!(
            "graded '{word}': correct={} mismatches={}",
            round.is_correct(),
            round.verdict().mismatches().len()
        );

        print_feedback(&render(&round, dictionary));
        stats.record(&round);
    }

    info!(
        "drill finished: {}/{} correct, {} skipped",
        stats.correct, stats.rounds, stats.skipped
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{AcquireError, TypedInput};
    use crate::wordlists::RandomWords;
    use std::io::Cursor;

    fn abc() -> Dictionary {
        Dictionary::from_rows([
            vec!["a", "alpha", "alfa"],
            vec!["b", "bravo"],
            vec!["c", "charlie"],
        ])
        .unwrap()
    }

    fn typed(input: &str) -> Acquirer<Cursor<Vec<u8>>, Vec<u8>> {
        Acquirer::typed(TypedInput::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        ))
    }

    fn only(word: &str) -> RandomWords {
        RandomWords::seeded(vec![word.to_string()], 0)
    }

    #[test]
    fn parse_command_recognizes_quit_and_skip() {
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("  Q "), Some(Command::Quit));
        assert_eq!(parse_command("EXIT"), Some(Command::Quit));
        assert_eq!(parse_command("skip"), Some(Command::Skip));
        assert_eq!(parse_command("alpha"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn drill_grades_until_quit() {
        let dictionary = abc();
        let mut acquirer = typed("charlie alfa bravo\ncharlie alpha\nquit\n");

        let stats = run_drill(
            &dictionary,
            &mut only("cab"),
            &mut acquirer,
            &DrillConfig::default(),
        )
        .unwrap();

        assert_eq!(stats.rounds, 2);
        assert_eq!(stats.correct, 1);
    }

    #[test]
    fn drill_ends_at_end_of_input() {
        let dictionary = abc();
        let mut acquirer = typed("alpha bravo\n");

        let stats = run_drill(
            &dictionary,
            &mut only("ab"),
            &mut acquirer,
            &DrillConfig::default(),
        )
        .unwrap();

        assert_eq!(stats.rounds, 1);
        assert_eq!(stats.correct, 1);
    }

    #[test]
    fn drill_skip_is_not_graded() {
        let dictionary = abc();
        let mut acquirer = typed("skip\nalpha\n");

        let stats = run_drill(
            &dictionary,
            &mut only("a"),
            &mut acquirer,
            &DrillConfig::default(),
        )
        .unwrap();

        assert_eq!(stats.rounds, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.correct, 1);
    }

    #[test]
    fn drill_respects_round_limit() {
        let dictionary = abc();
        let mut acquirer = typed("alpha\nalpha\nalpha\n");
        let config = DrillConfig {
            max_rounds: Some(2),
        };

        let stats = run_drill(&dictionary, &mut only("a"), &mut acquirer, &config).unwrap();
        assert_eq!(stats.rounds, 2);
    }

    #[test]
    fn drill_survives_voice_failure() {
        let dictionary = abc();
        let voice = Box::new(|_: &str| -> Result<String, AcquireError> {
            Err(AcquireError::ServiceUnavailable("no network".to_string()))
        });
        let mut acquirer = Acquirer::with_voice(
            voice,
            TypedInput::new(Cursor::new(b"bravo\n".to_vec()), Vec::new()),
        );

        let stats = run_drill(
            &dictionary,
            &mut only("b"),
            &mut acquirer,
            &DrillConfig::default(),
        )
        .unwrap();

        assert_eq!(stats.rounds, 1);
        assert_eq!(stats.correct, 1);
    }

    #[test]
    fn drill_with_no_words_is_an_error() {
        let dictionary = abc();
        let mut acquirer = typed("alpha\n");
        let mut empty = RandomWords::seeded(Vec::new(), 0);

        let result = run_drill(&dictionary, &mut empty, &mut acquirer, &DrillConfig::default());
        assert!(result.is_err());
    }
}
