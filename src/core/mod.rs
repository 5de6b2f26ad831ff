//! Core drill logic
//!
//! The answer-verification engine: dictionary, answer resolution, response
//! tokenization and grading. Everything here is pure and does no I/O.

mod dictionary;
mod grader;
mod resolver;
mod round;
mod tokenizer;

pub use dictionary::{Dictionary, DictionaryError, PhoneticEntry};
pub use grader::{Actual, Mismatch, Verdict, grade};
pub use resolver::{ExpectedSequence, expand};
pub use round::{Round, SessionStats};
pub use tokenizer::{ResponseTokens, tokenize, tokens};
