//! Terminal output formatting
//!
//! Display utilities for the text-mode board and end-of-game reveal.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_outcome, print_rejection};
