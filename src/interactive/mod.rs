//! Interactive TUI drill
//!
//! Full-screen typed drill built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, HistoryEntry, InputMode, run_tui};
