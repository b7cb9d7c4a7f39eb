//! Thread-safe game handle
//!
//! Every operation takes the single lock for its whole read-modify-write, so
//! concurrent submissions are applied one at a time.

use super::hints::LetterHints;
use super::state::{Game, GameSnapshot, GuessResponse};
use crate::core::Secret;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Reply to a new-game request: the secret words, used to size the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGameResponse {
    pub words: Vec<String>,
}

/// Cloneable handle to the one live game
#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(secret: Secret) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Game::new(secret))),
        }
    }

    // A panic cannot leave the game half-updated: histories are pushed
    // together and flags are set after, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install a new secret and clear the history
    pub fn reset(&self, secret: Secret) -> NewGameResponse {
        let mut game = self.lock();
        game.reset(secret);
        NewGameResponse {
            words: game.secret().texts(),
        }
    }

    /// Clear the history and play the same secret again
    pub fn restart(&self) -> NewGameResponse {
        let mut game = self.lock();
        game.restart();
        NewGameResponse {
            words: game.secret().texts(),
        }
    }

    /// Submit one attempt; see [`Game::submit_guess`]
    pub fn submit_guess<S: AsRef<str>>(&self, attempt: &[S]) -> GuessResponse {
        self.lock().submit_guess(attempt)
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    #[must_use]
    pub fn letter_hints(&self) -> Vec<LetterHints> {
        self.lock().letter_hints()
    }

    /// Attempts left before the game is lost
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.lock().attempts_remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_ATTEMPTS;
    use std::thread;

    fn shared(secret: &str) -> SharedGame {
        SharedGame::new(Secret::parse(secret).unwrap())
    }

    #[test]
    fn restart_returns_secret_words() {
        let game = shared("apple mango");
        game.submit_guess(&["plant", "tango"]);

        let response = game.restart();

        assert_eq!(response.words, vec!["APPLE", "MANGO"]);
        assert!(game.snapshot().guesses.is_empty());
    }

    #[test]
    fn reset_replaces_secret() {
        let game = shared("apple");
        let response = game.reset(Secret::parse("robot smile").unwrap());

        assert_eq!(response.words, vec!["ROBOT", "SMILE"]);
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn clones_share_one_game() {
        let game = shared("apple");
        let other = game.clone();

        other.submit_guess(&["allot"]);

        assert_eq!(game.snapshot().guesses, vec![vec!["ALLOT"]]);
        assert_eq!(game.letter_hints()[0].len(), 4);
    }

    #[test]
    fn concurrent_submissions_never_exceed_max_attempts() {
        let game = shared("apple mango");

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let game = game.clone();
                thread::spawn(move || game.submit_guess(&["plant", "tango"]).valid)
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&valid| valid)
            .count();

        let snapshot = game.snapshot();
        assert_eq!(accepted, MAX_ATTEMPTS);
        assert_eq!(snapshot.guesses.len(), MAX_ATTEMPTS);
        assert_eq!(snapshot.feedback.len(), snapshot.guesses.len());
        assert!(snapshot.game_over);
        assert!(!snapshot.won);
    }

    #[test]
    fn concurrent_winner_stops_the_game() {
        let game = shared("robot");

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let game = game.clone();
                let guess = if i == 3 { "robot" } else { "boobs" };
                thread::spawn(move || game.submit_guess(&[guess]))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = game.snapshot();
        assert!(snapshot.game_over);
        assert!(snapshot.guesses.len() <= MAX_ATTEMPTS);
        assert_eq!(snapshot.guesses.len(), snapshot.feedback.len());
        if snapshot.won {
            assert_eq!(snapshot.guesses.last().unwrap(), &vec!["ROBOT".to_string()]);
        }
    }
}
