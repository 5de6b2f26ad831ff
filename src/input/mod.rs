//! Response acquisition
//!
//! Getting the learner's answer is the only slow, fallible step of a round.
//! Voice backends sit behind [`ResponseSource`] and fail with [`AcquireError`];
//! [`Acquirer`] swallows those failures and falls back to typed input.

mod acquirer;
pub mod recognizer;
pub mod typed;

pub use acquirer::Acquirer;
pub use recognizer::CommandRecognizer;
pub use typed::TypedInput;

use thiserror::Error;

/// Failures of a voice backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcquireError {
    #[error("speech recognition could not understand the audio")]
    RecognitionFailed,

    #[error("could not request results from the speech recognition service: {0}")]
    ServiceUnavailable(String),
}

/// A blocking source of spoken responses
pub trait ResponseSource {
    /// Capture one response for `word` and return its transcript
    ///
    /// # Errors
    ///
    /// Returns `RecognitionFailed` when the speech was not understood and
    /// `ServiceUnavailable` when the backend could not be reached.
    fn acquire(&mut self, word: &str) -> Result<String, AcquireError>;
}

impl<F> ResponseSource for F
where
    F: FnMut(&str) -> Result<String, AcquireError>,
{
    fn acquire(&mut self, word: &str) -> Result<String, AcquireError> {
        self(word)
    }
}
