//! Keyboard hints: the strongest feedback seen so far for each letter

use crate::core::{LetterFeedback, Word, WordFeedback};
use rustc_hash::FxHashMap;

/// Best-known feedback per letter for one secret word
///
/// A letter seen as both present and correct is reported as correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterHints {
    letters: FxHashMap<u8, LetterFeedback>,
}

impl LetterHints {
    /// Fold one guess word and its feedback into the hints
    pub fn record(&mut self, guess: &Word, feedback: &WordFeedback) {
        for (&letter, &status) in guess.letters().iter().zip(feedback.letters()) {
            self.letters
                .entry(letter)
                .and_modify(|known| *known = (*known).max(status))
                .or_insert(status);
        }
    }

    /// Hint for an uppercase letter, `None` if it has not been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterFeedback> {
        self.letters.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};

    fn record(hints: &mut LetterHints, guess: &str, secret: &str) {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        hints.record(&guess, &WordFeedback::calculate(&guess, &secret));
    }

    #[test]
    fn hints_start_empty() {
        let hints = LetterHints::default();
        assert!(hints.is_empty());
        assert_eq!(hints.get(b'A'), None);
    }

    #[test]
    fn hints_keep_strongest_status() {
        let mut hints = LetterHints::default();
        record(&mut hints, "eerie", "level");
        assert_eq!(hints.get(b'E'), Some(Correct));
        assert_eq!(hints.get(b'R'), Some(Absent));

        record(&mut hints, "alloy", "level");
        assert_eq!(hints.get(b'L'), Some(Present));

        // Two Ls land exactly; the absent Ls in between do not win
        record(&mut hints, "lllll", "level");
        assert_eq!(hints.get(b'L'), Some(Correct));
    }

    #[test]
    fn hints_lookup_is_case_insensitive() {
        let mut hints = LetterHints::default();
        record(&mut hints, "crane", "robot");
        assert_eq!(hints.get(b'r'), Some(Present));
        assert_eq!(hints.len(), 5);
    }
}
