//! Multi-Wordle
//!
//! Wordle over a whole sentence: every attempt guesses one five-letter word per
//! secret word, and each letter gets correct / present / absent feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use multiwordle::core::Secret;
//! use multiwordle::game::SharedGame;
//!
//! let game = SharedGame::new(Secret::parse("apple mango").unwrap());
//!
//! let response = game.submit_guess(&["allot", "mango"]);
//! assert!(response.valid);
//! println!("{}", response.snapshot.feedback[0][0].to_emoji());
//! ```

// Core domain types
pub mod core;

// Game state machine and shared handle
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
