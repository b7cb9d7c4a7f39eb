//! TUI application state and logic

use crate::core::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{GameSnapshot, LetterHints, SharedGame};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: SharedGame,
    pub snapshot: GameSnapshot,
    pub hints: Vec<LetterHints>,
    /// One input buffer per secret word
    pub inputs: Vec<String>,
    /// Index of the input field receiving keystrokes
    pub focus: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of attempts used, index 0 unused
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(game: SharedGame) -> Self {
        let snapshot = game.snapshot();
        let hints = game.letter_hints();
        let word_count = snapshot.words.len();

        Self {
            game,
            snapshot,
            hints,
            inputs: vec![String::new(); word_count],
            focus: 0,
            messages: vec![
                Message {
                    text: format!("Guess the {word_count}-word sentence in {MAX_ATTEMPTS} tries!"),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB/arrows switch words, Enter submits".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    fn refresh(&mut self) {
        self.snapshot = self.game.snapshot();
        self.hints = self.game.letter_hints();
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {
                    // Board is frozen until a new game starts
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c)
                    if c.is_ascii_alphabetic() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    self.type_letter(c);
                }
                KeyCode::Char(' ') | KeyCode::Tab | KeyCode::Right => self.focus_next(),
                KeyCode::BackTab | KeyCode::Left => self.focus_previous(),
                KeyCode::Backspace => self.delete_letter(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }

    fn type_letter(&mut self, c: char) {
        let input = &mut self.inputs[self.focus];
        if input.len() < WORD_LENGTH {
            input.push(c.to_ascii_uppercase());
        }
        if self.inputs[self.focus].len() == WORD_LENGTH {
            self.focus_next();
        }
    }

    fn delete_letter(&mut self) {
        if self.inputs[self.focus].is_empty() && self.focus > 0 {
            self.focus -= 1;
        }
        self.inputs[self.focus].pop();
    }

    fn focus_next(&mut self) {
        if self.focus + 1 < self.inputs.len() {
            self.focus += 1;
        }
    }

    fn focus_previous(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    /// Submit the current inputs as one attempt
    pub fn submit(&mut self) {
        if self.inputs.iter().any(|input| input.len() != WORD_LENGTH) {
            let count = self.inputs.len();
            self.add_message(
                &format!("Please enter {count} {WORD_LENGTH}-letter words!"),
                MessageStyle::Error,
            );
            return;
        }

        let response = self.game.submit_guess(&self.inputs);
        self.refresh();

        if let Some(rejection) = response.rejection {
            self.add_message(&format!("Invalid guess: {rejection}"), MessageStyle::Error);
            return;
        }

        for input in &mut self.inputs {
            input.clear();
        }
        self.focus = 0;

        if !self.snapshot.game_over {
            let remaining = MAX_ATTEMPTS - self.snapshot.guesses.len();
            self.add_message(&format!("{remaining} attempts left"), MessageStyle::Info);
            return;
        }

        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        if self.snapshot.won {
            let attempts = self.snapshot.guesses.len();
            self.stats.games_won += 1;
            self.stats.guess_distribution[attempts] += 1;

            let celebration = match attempts {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two attempts! 🔥",
                3 => "✨ SPLENDID! Three attempts! ✨",
                4 => "👏 GREAT JOB! Four attempts! 👏",
                5 => "🎉 NICE WORK! Five attempts! 🎉",
                _ => "😅 PHEW! Got it in six! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(
                &format!("Game Over! The sentence was: {}", self.snapshot.words.join(" ")),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game.restart();
        self.refresh();
        for input in &mut self.inputs {
            input.clear();
        }
        self.focus = 0;
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored first.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Draw and dispatch events from `next_event` until the app quits
fn run_app<B, F>(terminal: &mut Terminal<B>, mut app: App, mut next_event: F) -> Result<()>
where
    B: ratatui::backend::Backend,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Secret;
    use ratatui::backend::TestBackend;

    fn app(secret: &str) -> App {
        App::new(SharedGame::new(Secret::parse(secret).unwrap()))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_fills_fields_and_advances_focus() {
        let mut app = app("apple mango");
        type_text(&mut app, "plant");
        assert_eq!(app.inputs[0], "PLANT");
        assert_eq!(app.focus, 1);

        type_text(&mut app, "tan");
        assert_eq!(app.inputs[1], "TAN");
    }

    #[test]
    fn backspace_moves_back_across_fields() {
        let mut app = app("apple mango");
        type_text(&mut app, "plant");
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.focus, 0);
        assert_eq!(app.inputs[0], "PLAN");
    }

    #[test]
    fn incomplete_submission_is_refused_locally() {
        let mut app = app("apple mango");
        type_text(&mut app, "plant");
        press(&mut app, KeyCode::Enter);

        assert!(app.snapshot.guesses.is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("2 5-letter words"));
    }

    #[test]
    fn submission_records_attempt_and_clears_inputs() {
        let mut app = app("apple mango");
        type_text(&mut app, "planttango");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.snapshot.guesses.len(), 1);
        assert!(app.inputs.iter().all(String::is_empty));
        assert_eq!(app.focus, 0);
        assert_eq!(app.hints.len(), 2);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn winning_updates_statistics() {
        let mut app = app("robot");
        type_text(&mut app, "robot");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn losing_reveals_sentence_and_new_game_resets() {
        let mut app = app("robot");
        for _ in 0..MAX_ATTEMPTS {
            type_text(&mut app, "boobs");
            press(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("ROBOT")));

        // Letters are ignored while the board is frozen
        press(&mut app, KeyCode::Char('x'));
        assert!(app.inputs[0].is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.snapshot.guesses.is_empty());
    }

    #[test]
    fn control_chords_do_not_type() {
        let mut app = app("robot");
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert!(app.inputs[0].is_empty());

        app.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(app.inputs[0], "A");
    }

    #[test]
    fn event_loop_stops_on_quit_key() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut events = vec![
            Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Event::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)),
        ];

        let result = run_app(&mut terminal, app("robot"), || {
            events
                .pop()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more events"))
        });

        assert!(result.is_ok());
        assert!(events.is_empty());
    }

    #[test]
    fn event_read_failure_is_returned() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        let result = run_app(&mut terminal, app("robot"), || {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        });

        let err = result.unwrap_err();
        assert!(err.to_string().contains("terminal gone"));
    }

    #[test]
    fn quit_keys() {
        let mut interrupted = app("robot");
        interrupted.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(interrupted.should_quit);

        let mut escaped = app("robot");
        press(&mut escaped, KeyCode::Esc);
        assert!(escaped.should_quit);
    }
}
