//! TUI rendering with ratatui
//!
//! Layout for the full-screen drill.

use super::app::{App, InputMode, MessageStyle};
use crate::output::AnswerLine;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: WordSource>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Challenge and feedback
            Constraint::Percentage(40), // Answer, accuracy, messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("📻 PHONETIC ALPHABET DRILL")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Challenge
            Constraint::Min(5),         // Feedback
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_challenge(f, app, chunks[0]);
    render_feedback(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_challenge<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let content = app.current_word.as_ref().map_or_else(
        || vec![Line::from("No word available")],
        |word| {
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::raw("Spell: "),
                    Span::styled(
                        word.to_uppercase(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
            ]
        },
    );

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Current Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_feedback<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (content, color) = match &app.feedback {
        None => (vec![Line::from("Waiting for your answer...")], Color::White),
        Some(feedback) if feedback.correct => (
            vec![Line::from(Span::styled(
                feedback.headline.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))],
            Color::Green,
        ),
        Some(feedback) => {
            let mut lines = vec![Line::from(Span::styled(
                feedback.headline.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))];
            lines.extend(feedback.details.iter().map(|d| Line::from(d.clone())));
            (lines, Color::Red)
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Feedback ")
                .borders(Borders::ALL)
                .style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_history<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, entry)| {
            let mark = if entry.correct { "✅" } else { "❌" };
            let content = format!(
                "{}: {} {} \"{}\"",
                app.history.len() - i,
                mark,
                entry.word.to_uppercase(),
                entry.response
            );
            ListItem::new(content)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Canonical answer
            Constraint::Length(3),      // Accuracy gauge
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_answer(f, app, chunks[0]);
    render_accuracy(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_answer<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let content: Vec<Line> = match &app.feedback {
        Some(feedback) if !feedback.answer.is_empty() => {
            feedback.answer.iter().map(answer_line).collect()
        }
        _ => vec![Line::from(Span::styled(
            "Shown after a wrong answer",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Correct Answer ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

/// Code-word with the initial highlighted
fn answer_line(line: &AnswerLine) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            line.initial.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        Span::raw(line.rest.clone()),
    ])
}

fn render_accuracy<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let accuracy = app.stats.accuracy();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Accuracy ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(accuracy.round().clamp(0.0, 100.0) as u16)
        .label(format!(
            "{}/{} correct ({accuracy:.0}%)",
            app.stats.correct, app.stats.rounds
        ));

    f.render_widget(gauge, area);
}

fn render_messages<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Answer => (
            " Type the code-words, separated by spaces | Enter: submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Review => (
            " Press Enter for the next word or 'q' to quit ",
            app.input_buffer.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let rounds = Paragraph::new(format!(
        "Rounds: {} | Skipped: {}",
        app.stats.rounds, app.stats.skipped
    ))
    .alignment(Alignment::Center);
    f.render_widget(rounds, chunks[0]);

    let letters = Paragraph::new(format!("Alphabet: {} letters", app.dictionary.len()))
        .alignment(Alignment::Center);
    f.render_widget(letters, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Answer => "Enter: Submit | Tab: Skip | Esc: Quit",
        InputMode::Review => "Enter/n: Next Word | q/Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
