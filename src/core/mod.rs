//! Core domain types for multi-word Wordle
//!
//! Pure types with no I/O: words, secrets and per-letter feedback.
//! Game rules are fixed at compile time and referenced by name everywhere.

mod feedback;
mod secret;
mod word;

pub use feedback::{LetterFeedback, WordFeedback};
pub use secret::{Secret, SecretError};
pub use word::{Word, WordError};

/// Number of letters in every secret and guess word
pub const WORD_LENGTH: usize = 5;

/// Number of attempts before a game is lost
pub const MAX_ATTEMPTS: usize = 6;
