//! TUI application state and logic

use crate::core::{Dictionary, Round, SessionStats};
use crate::output::{Feedback, render};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S: WordSource> {
    pub dictionary: &'a Dictionary,
    pub words: S,
    pub current_word: Option<String>,
    pub input_buffer: String,
    pub feedback: Option<Feedback>,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing code-words for the current word
    Answer,
    /// Looking at feedback, waiting for the next word
    Review,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub word: String,
    pub response: String,
    pub correct: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: WordSource> App<'a, S> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, words: S) -> Self {
        Self {
            dictionary,
            words,
            current_word: None,
            input_buffer: String::new(),
            feedback: None,
            history: Vec::new(),
            messages: vec![
                Message {
                    text: "Welcome! Type the code-word for each letter, separated by spaces."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter to submit, Tab to skip, Esc to quit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: SessionStats::default(),
            should_quit: false,
            input_mode: InputMode::Answer,
        }
    }

    /// Move on to a fresh word
    pub fn next_word(&mut self) {
        self.input_buffer.clear();
        self.feedback = None;
        self.input_mode = InputMode::Answer;
        self.current_word = self.words.next_word().map(str::to_string);

        if self.current_word.is_none() {
            self.add_message("No words available!", MessageStyle::Error);
        }
    }

    /// Grade the typed response against the current word
    pub fn submit(&mut self) {
        let Some(word) = self.current_word.clone() else {
            return;
        };
        let response = self.input_buffer.trim().to_string();

        let round = Round::grade(&word, &response, self.dictionary);
        self.stats.record(&round);

        let correct = round.is_correct();
        let feedback = render(&round, self.dictionary);
        if correct {
            self.add_message(
                &format!("{} spelled correctly!", word.to_uppercase()),
                MessageStyle::Success,
            );
        } else {
            let wrong = round.verdict().mismatches().len();
            self.add_message(
                &format!("{}: {wrong} letter(s) wrong", word.to_uppercase()),
                MessageStyle::Error,
            );
        }

        self.history.push(HistoryEntry {
            word,
            response,
            correct,
        });
        self.feedback = Some(feedback);
        self.input_mode = InputMode::Review;
    }

    /// Skip the current word without grading
    pub fn skip(&mut self) {
        if let Some(word) = &self.current_word {
            let text = format!("Skipped {}", word.to_uppercase());
            self.stats.skip();
            self.add_message(&text, MessageStyle::Info);
        }
        self.next_word();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Answer => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.skip(),
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                _ => {}
            },
            InputMode::Review => match code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char(' ' | 'n') => self.next_word(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(app: App<'_, S>) -> Result<SessionStats> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<SessionStats> {
    app.next_word();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
