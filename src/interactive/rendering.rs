//! TUI rendering with ratatui
//!
//! One board per secret word, the input row, a hint keyboard and a status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterFeedback, MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::LetterHints;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Boards
            Constraint::Length(3),                       // Inputs
            Constraint::Min(5),                          // Keyboard + messages
            Constraint::Length(1),                       // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_boards(f, app, chunks[1]);
    render_inputs(f, app, chunks[2]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);

    render_keyboard(f, app, bottom[0]);
    render_messages(f, app, bottom[1]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 MULTI-WORDLE")
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

/// Tile colors for a feedback value
fn feedback_style(feedback: LetterFeedback) -> Style {
    let bg = match feedback {
        LetterFeedback::Correct => Color::Green,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_boards(f: &mut Frame, app: &App, area: Rect) {
    let word_count = app.snapshot.words.len();
    let constraints = vec![Constraint::Ratio(1, word_count as u32); word_count];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (w, column) in columns.iter().enumerate() {
        let lines = board_lines(app, w);
        let title = if app.snapshot.game_over {
            format!(" {} ", app.snapshot.words[w])
        } else {
            format!(" Word {} ", w + 1)
        };
        let board = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(board, *column);
    }
}

/// Rows for one word's board: guessed rows colored, the rest blank
fn board_lines(app: &App, w: usize) -> Vec<Line<'static>> {
    let empty = Style::default().fg(Color::DarkGray);

    (0..MAX_ATTEMPTS)
        .map(|row| match app.snapshot.guesses.get(row) {
            Some(attempt) => {
                let feedback = app.snapshot.feedback[row][w];
                Line::from(
                    attempt[w]
                        .chars()
                        .zip(feedback.letters())
                        .map(|(letter, &status)| {
                            Span::styled(format!(" {letter} "), feedback_style(status))
                        })
                        .collect::<Vec<_>>(),
                )
            }
            None => Line::from(Span::styled(" · ".repeat(WORD_LENGTH), empty)),
        })
        .collect()
}

fn render_inputs(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guessing => (
            " Your Guess | TAB next word | Enter submit | Ctrl+N restart | ESC quit ",
            Color::Yellow,
        ),
        InputMode::GameOver => (" Press 'n' for new game or 'q' to quit ", Color::Green),
    };

    let mut spans = Vec::new();
    for (i, input) in app.inputs.iter().enumerate() {
        let padded = format!("{input:_<width$}", width = WORD_LENGTH);
        let style = if i == app.focus && app.input_mode == InputMode::Guessing {
            Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(padded, style));
        spans.push(Span::raw("   "));
    }

    let input = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

/// Keyboard colored by what is known about the focused word
fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .hints
        .get(app.focus)
        .map(keyboard_lines)
        .unwrap_or_default();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Letters: Word {} ", app.focus + 1))
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn keyboard_lines(hints: &LetterHints) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.bytes()
                    .map(|key| {
                        let style = hints
                            .get(key)
                            .map_or_else(|| Style::default().fg(Color::White), feedback_style);
                        Span::styled(format!(" {} ", key as char), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let remaining = MAX_ATTEMPTS - app.snapshot.guesses.len();
    let attempts_text = if app.snapshot.won {
        "Solved!".to_string()
    } else if app.snapshot.game_over {
        "Out of attempts".to_string()
    } else {
        format!("Attempts left: {remaining}")
    };
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let distribution: Vec<String> = app.stats.guess_distribution[1..]
        .iter()
        .enumerate()
        .map(|(i, count)| format!("{}:{count}", i + 1))
        .collect();
    let wins = Paragraph::new(format!("Wins {}", distribution.join(" ")))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(wins, chunks[2]);
}
