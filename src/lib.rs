//! Phonetic Drill
//!
//! Teaches spelling with a phonetic alphabet (Alfa, Bravo, Charlie, ...): the learner
//! sees a word, answers with one code-word per letter, and gets per-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use phonetic_drill::core::{Actual, Round};
//! use phonetic_drill::wordlists::nato;
//!
//! let dictionary = nato().unwrap();
//!
//! let round = Round::grade("cab", "Charlie Alpha Bravo", &dictionary);
//! assert!(round.is_correct());
//!
//! let round = Round::grade("cab", "charlie zulu", &dictionary);
//! let mismatches = round.verdict().mismatches();
//! assert_eq!(mismatches[0].position, 1);
//! assert_eq!(mismatches[1].actual, Actual::Missing);
//! ```

// Core domain types and grading
pub mod core;

// Alphabets and word lists
pub mod wordlists;

// Voice and typed response acquisition
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
