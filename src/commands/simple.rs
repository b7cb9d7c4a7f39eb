//! Simple interactive CLI mode
//!
//! Line-based game without TUI: one line per attempt, words separated by spaces.

use crate::game::SharedGame;
use crate::output::{print_board, print_outcome, print_rejection};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Games finished during one text-mode session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_played: usize,
    pub games_won: usize,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(game: &SharedGame) -> Result<(), String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_session(game, stdin.lock(), &mut stdout)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Play games from `input` until it ends or the player quits
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn play_session<R: BufRead, W: Write>(
    game: &SharedGame,
    mut input: R,
    out: &mut W,
) -> io::Result<SessionSummary> {
    let word_count = game.snapshot().words.len();

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Multi-Wordle - Text Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the secret sentence of {} five-letter {}.",
        word_count.to_string().bright_cyan().bold(),
        if word_count == 1 { "word" } else { "words" }
    )?;
    writeln!(out, "Type all {word_count} guesses on one line, separated by spaces.\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' to restart the game\n")?;

    let mut summary = SessionSummary::default();

    loop {
        let remaining = game.attempts_remaining();
        let Some(line) = prompt(&mut input, out, &format!("Guess ({remaining} left)"))? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                game.restart();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        let attempt: Vec<&str> = line.split_whitespace().collect();
        let response = game.submit_guess(&attempt);

        if let Some(rejection) = &response.rejection {
            print_rejection(out, rejection)?;
            continue;
        }

        print_board(out, &response.snapshot)?;

        if response.snapshot.game_over {
            summary.games_played += 1;
            if response.snapshot.won {
                summary.games_won += 1;
            }
            print_outcome(out, &response.snapshot)?;

            match prompt(&mut input, out, "Play again? (yes/no)")?
                .map(|answer| answer.to_lowercase())
                .as_deref()
            {
                Some("yes" | "y") => {
                    game.restart();
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
                _ => break,
            }
        }
    }

    if summary.games_played > 0 {
        writeln!(
            out,
            "\n📊 Games played: {} | Won: {}",
            summary.games_played,
            summary.games_won.to_string().green().bold()
        )?;
    }
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(summary)
}

/// Show a prompt and read one trimmed line, `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
