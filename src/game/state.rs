//! Game state machine
//!
//! A game moves from `InProgress` to either `Won` or `Lost` and stays there
//! until it is reset. Only [`Game::submit_guess`] appends to the history.

use super::hints::LetterHints;
use crate::core::{MAX_ATTEMPTS, Secret, WORD_LENGTH, Word, WordError, WordFeedback};
use std::fmt;
use tracing::{debug, info};

/// One accepted attempt: a guess word per secret word
pub type Attempt = Vec<Word>;

/// Feedback for one attempt, a `WordFeedback` per secret word
pub type FeedbackRow = Vec<WordFeedback>;

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Check if the game has ended
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why an attempt was not accepted
///
/// A rejected attempt leaves the game untouched and does not use up a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The game already ended; reset to play again
    GameOver,
    /// The attempt must contain one guess per secret word
    WordCount { expected: usize, actual: usize },
    /// A guess word does not have [`WORD_LENGTH`] letters
    WordLength { index: usize, length: usize },
    /// A guess word contains something other than ASCII letters
    InvalidCharacters { index: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "the game is already over"),
            Self::WordCount { expected, actual } => {
                write!(f, "expected {expected} guess words, got {actual}")
            }
            Self::WordLength { index, length } => write!(
                f,
                "guess word {} must be {WORD_LENGTH} letters, got {length}",
                index + 1
            ),
            Self::InvalidCharacters { index } => {
                write!(f, "guess word {} must contain only letters", index + 1)
            }
        }
    }
}

impl std::error::Error for Rejection {}

/// Everything a caller needs to render the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// The secret words. Always included so the final reveal can be shown.
    pub words: Vec<String>,
    pub guesses: Vec<Vec<String>>,
    pub feedback: Vec<FeedbackRow>,
    pub game_over: bool,
    pub won: bool,
}

/// Result of submitting an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResponse {
    /// Whether the attempt was accepted and recorded
    pub valid: bool,
    pub rejection: Option<Rejection>,
    pub snapshot: GameSnapshot,
}

/// A single multi-word game
#[derive(Debug, Clone)]
pub struct Game {
    secret: Secret,
    guesses: Vec<Attempt>,
    feedback: Vec<FeedbackRow>,
    game_over: bool,
    won: bool,
}

impl Game {
    /// Start a game for the given secret
    #[must_use]
    pub fn new(secret: Secret) -> Self {
        info!(words = secret.len(), "new game");
        Self {
            secret,
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            feedback: Vec::with_capacity(MAX_ATTEMPTS),
            game_over: false,
            won: false,
        }
    }

    /// Replace the game with a fresh one for a new secret
    pub fn reset(&mut self, secret: Secret) {
        *self = Self::new(secret);
    }

    /// Start over with the same secret
    pub fn restart(&mut self) {
        let secret = self.secret.clone();
        self.reset(secret);
    }

    /// Submit one attempt, a guess word per secret word
    ///
    /// Invalid attempts are reported through `valid`/`rejection` and leave the
    /// state unchanged. Valid attempts are evaluated word by word, recorded,
    /// and may end the game.
    ///
    /// # Examples
    /// ```
    /// use multiwordle::core::Secret;
    /// use multiwordle::game::Game;
    ///
    /// let mut game = Game::new(Secret::parse("apple mango").unwrap());
    ///
    /// let response = game.submit_guess(&["plan", "mango"]);
    /// assert!(!response.valid);
    ///
    /// let response = game.submit_guess(&["apple", "mango"]);
    /// assert!(response.valid && response.snapshot.won);
    /// ```
    pub fn submit_guess<S: AsRef<str>>(&mut self, attempt: &[S]) -> GuessResponse {
        let attempt = match self.validate(attempt) {
            Ok(attempt) => attempt,
            Err(rejection) => {
                debug!(%rejection, "attempt rejected");
                return GuessResponse {
                    valid: false,
                    rejection: Some(rejection),
                    snapshot: self.snapshot(),
                };
            }
        };

        let row: FeedbackRow = attempt
            .iter()
            .zip(self.secret.words())
            .map(|(guess, secret)| WordFeedback::calculate(guess, secret))
            .collect();
        let all_correct = row.iter().all(WordFeedback::is_perfect);

        debug!(
            attempt = self.guesses.len() + 1,
            correct = row.iter().map(WordFeedback::count_correct).sum::<usize>(),
            present = row.iter().map(WordFeedback::count_present).sum::<usize>(),
            "attempt accepted"
        );

        self.guesses.push(attempt);
        self.feedback.push(row);

        if all_correct {
            self.game_over = true;
            self.won = true;
            info!(attempts = self.guesses.len(), "game won");
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            self.game_over = true;
            info!(secret = %self.secret, "game lost");
        }

        GuessResponse {
            valid: true,
            rejection: None,
            snapshot: self.snapshot(),
        }
    }

    fn validate<S: AsRef<str>>(&self, attempt: &[S]) -> Result<Attempt, Rejection> {
        if self.game_over {
            return Err(Rejection::GameOver);
        }

        if attempt.len() != self.secret.len() {
            return Err(Rejection::WordCount {
                expected: self.secret.len(),
                actual: attempt.len(),
            });
        }

        attempt
            .iter()
            .enumerate()
            .map(|(index, guess)| {
                Word::new(guess).map_err(|err| match err {
                    WordError::InvalidLength(length) => Rejection::WordLength { index, length },
                    WordError::NonAscii | WordError::InvalidCharacters => {
                        Rejection::InvalidCharacters { index }
                    }
                })
            })
            .collect()
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        match (self.game_over, self.won) {
            (true, true) => GameStatus::Won,
            (true, false) => GameStatus::Lost,
            (false, _) => GameStatus::InProgress,
        }
    }

    /// Attempts left before the game is lost
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        if self.game_over {
            0
        } else {
            MAX_ATTEMPTS - self.guesses.len()
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Accepted attempts, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Attempt] {
        &self.guesses
    }

    /// Feedback rows, aligned with [`Game::guesses`]
    #[must_use]
    pub fn feedback(&self) -> &[FeedbackRow] {
        &self.feedback
    }

    /// Best-known feedback for every guessed letter, one entry per secret word
    #[must_use]
    pub fn letter_hints(&self) -> Vec<LetterHints> {
        (0..self.secret.len())
            .map(|w| {
                let mut hints = LetterHints::default();
                for (attempt, row) in self.guesses.iter().zip(&self.feedback) {
                    hints.record(&attempt[w], &row[w]);
                }
                hints
            })
            .collect()
    }

    /// Copy of the full state for rendering
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            words: self.secret.texts(),
            guesses: self
                .guesses
                .iter()
                .map(|attempt| attempt.iter().map(|w| w.text().to_string()).collect())
                .collect(),
            feedback: self.feedback.clone(),
            game_over: self.game_over,
            won: self.won,
        }
    }
}
