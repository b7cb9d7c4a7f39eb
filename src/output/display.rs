//! Display functions for the text-mode game

use super::formatters::{colored_word, share_text};
use crate::core::MAX_ATTEMPTS;
use crate::game::{GameSnapshot, Rejection};
use colored::Colorize;
use std::io::{self, Write};

/// Print every accepted attempt as rows of colored tiles
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_board<W: Write>(out: &mut W, snapshot: &GameSnapshot) -> io::Result<()> {
    writeln!(out)?;
    for (turn, (attempt, row)) in snapshot.guesses.iter().zip(&snapshot.feedback).enumerate() {
        let words: Vec<String> = attempt
            .iter()
            .zip(row)
            .map(|(word, feedback)| colored_word(word, feedback))
            .collect();
        writeln!(
            out,
            "  {} {}",
            format!("{}.", turn + 1).bright_black(),
            words.join("  ")
        )?;
    }

    let remaining = MAX_ATTEMPTS - snapshot.guesses.len();
    if !snapshot.game_over {
        writeln!(
            out,
            "\n  {} {}",
            remaining.to_string().bright_cyan().bold(),
            if remaining == 1 { "attempt left" } else { "attempts left" }
        )?;
    }
    writeln!(out)
}

/// Print the end-of-game banner, revealing the secret on a loss
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_outcome<W: Write>(out: &mut W, snapshot: &GameSnapshot) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    if snapshot.won {
        let attempts = snapshot.guesses.len();
        writeln!(
            out,
            "{}",
            "  🎉 Congratulations! You guessed the sentence! 🎉"
                .bright_green()
                .bold()
        )?;
        writeln!(
            out,
            "  Solved in {} {}",
            attempts.to_string().bright_cyan().bold(),
            if attempts == 1 { "attempt" } else { "attempts" }
        )?;
    } else {
        writeln!(
            out,
            "  {} {}",
            "Game Over! The sentence was:".red().bold(),
            snapshot.words.join(" ").bright_yellow().bold()
        )?;
    }
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out)?;
    write!(out, "{}", share_text(snapshot))?;
    writeln!(out)
}

/// Print why an attempt was not accepted
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_rejection<W: Write>(out: &mut W, rejection: &Rejection) -> io::Result<()> {
    writeln!(out, "❌ Invalid guess: {rejection}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Secret;
    use crate::game::Game;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_lists_attempts_and_remaining() {
        let mut game = Game::new(Secret::parse("apple mango").unwrap());
        game.submit_guess(&["plant", "tango"]);

        let text = render(|out| print_board(out, &game.snapshot()));
        assert!(text.contains("1."));
        assert!(text.contains("attempts left"));
    }

    #[test]
    fn outcome_reveals_secret_on_loss() {
        let mut game = Game::new(Secret::parse("apple").unwrap());
        for _ in 0..MAX_ATTEMPTS {
            game.submit_guess(&["plant"]);
        }

        let text = render(|out| print_outcome(out, &game.snapshot()));
        assert!(text.contains("APPLE"));
        assert!(text.contains("X/6"));
    }

    #[test]
    fn outcome_congratulates_on_win() {
        let mut game = Game::new(Secret::parse("apple").unwrap());
        game.submit_guess(&["apple"]);

        let text = render(|out| print_outcome(out, &game.snapshot()));
        assert!(text.contains("Congratulations"));
        assert!(text.contains("1/6"));
    }

    #[test]
    fn rejection_is_explained() {
        let text = render(|out| print_rejection(out, &Rejection::GameOver));
        assert!(text.contains("the game is already over"));
    }
}
