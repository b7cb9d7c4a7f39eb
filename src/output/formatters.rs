//! Formatting utilities for terminal output

use crate::core::{LetterFeedback, MAX_ATTEMPTS, WordFeedback};
use crate::game::{FeedbackRow, GameSnapshot};
use colored::{ColoredString, Colorize};

/// Format a feedback row as emoji, one group per word
#[must_use]
pub fn row_to_emoji(row: &FeedbackRow) -> String {
    row.iter()
        .map(WordFeedback::to_emoji)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, feedback: LetterFeedback) -> ColoredString {
    let tile = format!(" {letter} ").white().bold();
    match feedback {
        LetterFeedback::Correct => tile.on_green(),
        LetterFeedback::Present => tile.on_yellow(),
        LetterFeedback::Absent => tile.on_bright_black(),
    }
}

/// Render a guess word as a run of colored tiles
#[must_use]
pub fn colored_word(word: &str, feedback: &WordFeedback) -> String {
    word.chars()
        .zip(feedback.letters())
        .map(|(letter, &status)| letter_tile(letter, status).to_string())
        .collect()
}

/// Spoiler-free summary of a finished game, like the classic share grid
#[must_use]
pub fn share_text(snapshot: &GameSnapshot) -> String {
    let score = if snapshot.won {
        snapshot.guesses.len().to_string()
    } else {
        "X".to_string()
    };

    let count = snapshot.words.len();
    let noun = if count == 1 { "word" } else { "words" };
    let mut text = format!("Multi-Wordle ({count} {noun}) {score}/{MAX_ATTEMPTS}\n");
    for row in &snapshot.feedback {
        text.push_str(&row_to_emoji(row));
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Secret;
    use crate::game::Game;

    #[test]
    fn row_to_emoji_joins_words() {
        let row = vec![
            WordFeedback::PERFECT,
            WordFeedback::from_str("GY---").unwrap(),
        ];
        assert_eq!(row_to_emoji(&row), "🟩🟩🟩🟩🟩 🟩🟨⬜⬜⬜");
    }

    #[test]
    fn colored_word_keeps_letters() {
        let rendered = colored_word("ALLOT", &WordFeedback::from_str("GY---").unwrap());
        for letter in ["A", "L", "O", "T"] {
            assert!(rendered.contains(letter));
        }
    }

    #[test]
    fn share_text_for_win() {
        let mut game = Game::new(Secret::parse("apple").unwrap());
        game.submit_guess(&["allot"]);
        game.submit_guess(&["apple"]);

        assert_eq!(
            share_text(&game.snapshot()),
            "Multi-Wordle (1 word) 2/6\n🟩🟨⬜⬜⬜\n🟩🟩🟩🟩🟩\n"
        );
    }

    #[test]
    fn share_text_for_loss_hides_secret() {
        let mut game = Game::new(Secret::parse("apple mango").unwrap());
        for _ in 0..MAX_ATTEMPTS {
            game.submit_guess(&["plant", "tango"]);
        }

        let text = share_text(&game.snapshot());
        assert!(text.starts_with("Multi-Wordle (2 words) X/6\n"));
        assert!(!text.contains("APPLE"));
        assert_eq!(text.lines().count(), MAX_ATTEMPTS + 1);
    }
}
