//! Display functions for drill output

use super::feedback::{AnswerLine, Feedback};
use crate::commands::Spelling;
use crate::core::{Dictionary, SessionStats};
use colored::Colorize;

/// Print the word the learner has to spell
pub fn print_challenge(word: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Spell `{}`", word.red().bold());
}

/// Print the feedback for a round
pub fn print_feedback(feedback: &Feedback) {
    println!();
    if feedback.correct {
        println!("{}", format!("✅ {}", feedback.headline).green().bold());
        return;
    }

    println!("{}", format!("❌ {}", feedback.headline).red().bold());
    for line in &feedback.details {
        println!("   {line}");
    }

    if !feedback.answer.is_empty() {
        println!("\n   {}", "Correct answer:".bright_cyan().bold());
        for line in &feedback.answer {
            println!("     {}", highlight(line));
        }
    }
}

/// Print the phonetic spelling of a word, one code-word per line
pub fn print_spelling(spelling: &Spelling) {
    println!(
        "\n{} {}",
        "Spelling:".bright_cyan().bold(),
        spelling.word.bright_yellow().bold()
    );

    if spelling.lines.is_empty() {
        println!("   (no letters covered by the alphabet)");
    }
    for line in &spelling.lines {
        println!("   {}  {}", line.letter.to_uppercase(), highlight(line));
    }

    if !spelling.unmapped.is_empty() {
        let skipped: String = spelling.unmapped.iter().collect();
        println!(
            "\n   {} {}",
            "Not in alphabet (skipped):".bright_black(),
            skipped.bright_black()
        );
    }
}

/// Print every letter of the loaded alphabet with all accepted spellings
pub fn print_alphabet(dictionary: &Dictionary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PHONETIC ALPHABET".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for entry in dictionary.entries() {
        let line = AnswerLine::from_entry(entry);
        let alternates = &entry.words()[1..];
        if alternates.is_empty() {
            println!("   {}  {}", entry.letter().to_uppercase(), highlight(&line));
        } else {
            println!(
                "   {}  {}  {}",
                entry.letter().to_uppercase(),
                highlight(&line),
                format!("(also: {})", alternates.join(", ")).bright_black()
            );
        }
    }
}

/// Print the end-of-session tally
pub fn print_session_summary(stats: &SessionStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SESSION SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Rounds:    {}", stats.rounds);
    println!("   Correct:   {}", stats.correct.to_string().green());
    println!(
        "   Missed:    {}",
        (stats.rounds - stats.correct).to_string().red()
    );
    if stats.skipped > 0 {
        println!("   Skipped:   {}", stats.skipped);
    }
    println!(
        "   Accuracy:  {}",
        format!("{:.0}%", stats.accuracy()).bright_yellow().bold()
    );
}

/// Code-word with its initial highlighted
fn highlight(line: &AnswerLine) -> String {
    format!("{}{}", line.initial.bright_yellow().bold().underline(), line.rest)
}
