//! Voice-first response acquisition with typed fallback

use super::{ResponseSource, TypedInput};
use colored::Colorize;
use log::warn;
use std::io::{self, BufRead, Write};

/// Gets one response per round
///
/// With a voice backend the learner speaks, sees the transcript and may
/// re-record it. Any voice failure drops to a typed prompt for the same word;
/// voice errors never leave this type.
pub struct Acquirer<R, W> {
    voice: Option<Box<dyn ResponseSource>>,
    typed: TypedInput<R, W>,
    confirm_voice: bool,
}

impl<R: BufRead, W: Write> Acquirer<R, W> {
    /// Typed answers only
    pub const fn typed(typed: TypedInput<R, W>) -> Self {
        Self {
            voice: None,
            typed,
            confirm_voice: true,
        }
    }

    /// Spoken answers with typed fallback
    pub fn with_voice(voice: Box<dyn ResponseSource>, typed: TypedInput<R, W>) -> Self {
        Self {
            voice: Some(voice),
            typed,
            confirm_voice: true,
        }
    }

    /// Ask `Accept? [y]/n` after every transcript (on by default)
    #[must_use]
    pub fn confirm_voice(mut self, confirm: bool) -> Self {
        self.confirm_voice = confirm;
        self
    }

    #[must_use]
    pub const fn has_voice(&self) -> bool {
        self.voice.is_some()
    }

    /// Prompt/status writer shared with the typed fallback
    pub fn writer(&mut self) -> &mut W {
        self.typed.writer()
    }

    /// Acquire a response for `word`
    ///
    /// Returns `None` when typed input reaches end of file.
    ///
    /// # Errors
    ///
    /// Returns an error only for terminal I/O failures; voice failures are
    /// recovered by prompting for typed input.
    pub fn acquire(&mut self, word: &str) -> io::Result<Option<String>> {
        if let Some(voice) = self.voice.as_mut() {
            loop {
                match voice.acquire(word) {
                    Ok(transcript) => {
                        writeln!(
                            self.typed.writer(),
                            "Your response was: `{}`",
                            transcript.blue()
                        )?;
                        if !self.confirm_voice || self.typed.confirm("Accept?")? {
                            return Ok(Some(transcript));
                        }
                    }
                    Err(err) => {
                        warn!("voice input failed for '{word}': {err}");
                        writeln!(self.typed.writer(), "Err: {err}")?;
                        writeln!(
                            self.typed.writer(),
                            "Spoken responses not available. Type it instead:\n"
                        )?;
                        break;
                    }
                }
            }
        }

        self.typed.read_response(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::AcquireError;
    use std::collections::VecDeque;
    use std::io::Cursor;

    type Scripted = VecDeque<Result<String, AcquireError>>;

    fn typed(input: &str) -> TypedInput<Cursor<Vec<u8>>, Vec<u8>> {
        TypedInput::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn scripted(results: Vec<Result<&str, AcquireError>>) -> Box<dyn ResponseSource> {
        let mut queue: Scripted = results
            .into_iter()
            .map(|r| r.map(str::to_string))
            .collect();
        Box::new(move |_: &str| {
            queue
                .pop_front()
                .unwrap_or(Err(AcquireError::RecognitionFailed))
        })
    }

    fn output(acquirer: &mut Acquirer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(acquirer.writer()).into_owned()
    }

    #[test]
    fn typed_only_reads_prompt() {
        let mut acquirer = Acquirer::typed(typed("charlie alfa bravo\n"));
        assert!(!acquirer.has_voice());
        assert_eq!(
            acquirer.acquire("cab").unwrap().as_deref(),
            Some("charlie alfa bravo")
        );
        assert_eq!(acquirer.acquire("cab").unwrap(), None);
    }

    #[test]
    fn voice_transcript_accepted_by_default() {
        let mut acquirer =
            Acquirer::with_voice(scripted(vec![Ok("Charlie Alfa Bravo")]), typed("\n"));
        assert_eq!(
            acquirer.acquire("cab").unwrap().as_deref(),
            Some("Charlie Alfa Bravo")
        );
        assert!(output(&mut acquirer).contains("Charlie Alfa Bravo"));
    }

    #[test]
    fn rejected_transcript_is_recorded_again() {
        let voice = scripted(vec![Ok("Charlie Alpha"), Ok("Charlie Alfa Bravo")]);
        let mut acquirer = Acquirer::with_voice(voice, typed("n\ny\n"));
        assert_eq!(
            acquirer.acquire("cab").unwrap().as_deref(),
            Some("Charlie Alfa Bravo")
        );
    }

    #[test]
    fn confirmation_can_be_disabled() {
        let mut acquirer =
            Acquirer::with_voice(scripted(vec![Ok("kilo")]), typed("")).confirm_voice(false);
        assert_eq!(acquirer.acquire("k").unwrap().as_deref(), Some("kilo"));
        assert!(!output(&mut acquirer).contains("Accept?"));
    }

    #[test]
    fn recognition_failure_falls_back_to_typing() {
        let voice = scripted(vec![Err(AcquireError::RecognitionFailed)]);
        let mut acquirer = Acquirer::with_voice(voice, typed("kilo\n"));

        assert_eq!(acquirer.acquire("k").unwrap().as_deref(), Some("kilo"));
        let shown = output(&mut acquirer);
        assert!(shown.contains("could not understand"));
        assert!(shown.contains("Type it instead"));
    }

    #[test]
    fn service_failure_falls_back_to_typing() {
        let voice = scripted(vec![Err(AcquireError::ServiceUnavailable(
            "offline".to_string(),
        ))]);
        let mut acquirer = Acquirer::with_voice(voice, typed("oscar kilo\n"));

        assert_eq!(
            acquirer.acquire("ok").unwrap().as_deref(),
            Some("oscar kilo")
        );
        assert!(output(&mut acquirer).contains("offline"));
    }

    #[test]
    fn voice_is_retried_on_the_next_round() {
        let voice = scripted(vec![Err(AcquireError::RecognitionFailed), Ok("kilo")]);
        let mut acquirer = Acquirer::with_voice(voice, typed("kilo\n\n"));

        assert_eq!(acquirer.acquire("k").unwrap().as_deref(), Some("kilo"));
        assert_eq!(acquirer.acquire("k").unwrap().as_deref(), Some("kilo"));
    }
}
