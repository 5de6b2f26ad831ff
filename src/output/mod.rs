//! Terminal output formatting
//!
//! Feedback rendering and pretty-printing for the line-based commands.

pub mod display;
pub mod feedback;

pub use display::{
    print_alphabet, print_challenge, print_feedback, print_session_summary, print_spelling,
};
pub use feedback::{AnswerLine, Feedback, render};
