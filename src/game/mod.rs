//! Game engine
//!
//! `Game` is the state machine for one multi-word game. `SharedGame` is the
//! cloneable, lock-guarded handle that request handlers and UIs hold.

mod hints;
mod shared;
mod state;

pub use hints::LetterHints;
pub use shared::{NewGameResponse, SharedGame};
pub use state::{Attempt, FeedbackRow, Game, GameSnapshot, GameStatus, GuessResponse, Rejection};
