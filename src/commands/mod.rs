//! Command implementations

pub mod simple;

pub use simple::{SessionSummary, play_session, run_simple};
