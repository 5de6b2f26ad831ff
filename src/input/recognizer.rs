//! Voice input through an external speech-to-text program
//!
//! The program records one answer and prints the transcript on stdout.
//! The word being drilled is passed in the `PHONETIC_DRILL_WORD` environment
//! variable. Exit status contract:
//! - zero with a non-blank transcript: success
//! - zero with a blank transcript: `RecognitionFailed`
//! - non-zero, or the program cannot be started: `ServiceUnavailable`
//!
//! Capture timeouts are the program's responsibility.

use super::{AcquireError, ResponseSource};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::process::{Command, Stdio};
use std::time::Duration;

/// Environment variable carrying the current word to the recognizer
pub const WORD_ENV: &str = "PHONETIC_DRILL_WORD";

/// Runs a speech-to-text command once per response
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
    spinner: bool,
}

impl CommandRecognizer {
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            spinner: true,
        }
    }

    /// Split a command line on whitespace into program and arguments
    ///
    /// Returns `None` for a blank command line. Quotes and escapes are not
    /// interpreted; commands that need them belong in a wrapper script.
    ///
    /// # Examples
    /// ```
    /// use phonetic_drill::input::CommandRecognizer;
    ///
    /// let recognizer = CommandRecognizer::parse("whisper-listen --model tiny").unwrap();
    /// assert_eq!(recognizer.program(), "whisper-listen");
    /// assert!(CommandRecognizer::parse("   ").is_none());
    /// ```
    #[must_use]
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    /// Show or hide the "listening" spinner
    #[must_use]
    pub fn with_spinner(mut self, spinner: bool) -> Self {
        self.spinner = spinner;
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn start_spinner(&self, word: &str) -> Option<ProgressBar> {
        if !self.spinner {
            return None;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Listening... say the code-words for `{word}`"));
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    }
}

impl ResponseSource for CommandRecognizer {
    fn acquire(&mut self, word: &str) -> Result<String, AcquireError> {
        let spinner = self.start_spinner(word);

        let output = Command::new(&self.program)
            .args(&self.args)
            .env(WORD_ENV, word)
            .stdin(Stdio::null())
            .output();

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let output = output.map_err(|e| {
            AcquireError::ServiceUnavailable(format!("failed to run `{}`: {e}", self.program))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            return Err(AcquireError::ServiceUnavailable(if detail.is_empty() {
                format!("`{}` exited with {}", self.program, output.status)
            } else {
                format!("`{}` exited with {}: {detail}", self.program, output.status)
            }));
        }

        let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!("recognizer transcript for '{word}': {transcript:?}");

        if transcript.is_empty() {
            return Err(AcquireError::RecognitionFailed);
        }

        Ok(transcript)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell(script: &str) -> CommandRecognizer {
        CommandRecognizer::new("sh", vec!["-c".to_string(), script.to_string()]).with_spinner(false)
    }

    #[test]
    fn transcript_is_returned_trimmed() {
        let mut recognizer = shell("echo '  Charlie Alfa Bravo  '");
        assert_eq!(recognizer.acquire("cab").unwrap(), "Charlie Alfa Bravo");
    }

    #[test]
    fn word_is_passed_in_environment() {
        let mut recognizer = shell("echo \"$PHONETIC_DRILL_WORD\"");
        assert_eq!(recognizer.acquire("radar").unwrap(), "radar");
    }

    #[test]
    fn blank_transcript_is_recognition_failure() {
        let mut recognizer = shell("echo '   '");
        assert_eq!(
            recognizer.acquire("cab"),
            Err(AcquireError::RecognitionFailed)
        );
    }

    #[test]
    fn non_zero_exit_is_service_unavailable() {
        let mut recognizer = shell("echo 'quota exceeded' >&2; exit 3");
        match recognizer.acquire("cab") {
            Err(AcquireError::ServiceUnavailable(detail)) => {
                assert!(detail.contains("quota exceeded"), "{detail}");
            }
            other => panic!("expected ServiceUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_service_unavailable() {
        let mut recognizer =
            CommandRecognizer::new("phonetic-drill-no-such-recognizer", Vec::new())
                .with_spinner(false);
        assert!(matches!(
            recognizer.acquire("cab"),
            Err(AcquireError::ServiceUnavailable(_))
        ));
    }

    #[test]
    fn parse_splits_arguments() {
        let recognizer = CommandRecognizer::parse("stt --lang en").unwrap();
        assert_eq!(recognizer.program(), "stt");
        assert_eq!(recognizer.args, vec!["--lang", "en"]);
    }

    #[test]
    fn parse_keeps_quotes_literal() {
        let recognizer = CommandRecognizer::parse(r#"stt --prompt "two words""#).unwrap();
        assert_eq!(recognizer.args, vec!["--prompt", "\"two", "words\""]);
    }
}
