//! Per-letter feedback for a guess word
//!
//! Each position of a guess is classified against the matching secret word:
//! - `Correct` = letter in the right position (green)
//! - `Present` = letter elsewhere in the word (yellow)
//! - `Absent`  = no unmatched occurrence left (gray)

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
///
/// Variants are ordered by strength, so `max` gives the more informative one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

impl LetterFeedback {
    /// Lowercase name, matching the CSS classes of the web board
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        }
    }

    /// Colored square for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for LetterFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feedback for one guess word, aligned by position with its letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordFeedback([LetterFeedback; WORD_LENGTH]);

impl WordFeedback {
    /// All letters correct
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches as correct and consume those secret positions
    /// 2. Second pass: for every other guess letter, consume the leftmost unconsumed
    ///    matching secret letter and mark it present, otherwise absent
    ///
    /// A secret letter satisfies at most one guess letter, so repeated guess
    /// letters are never over-credited.
    ///
    /// # Examples
    /// ```
    /// use multiwordle::core::{LetterFeedback::*, Word, WordFeedback};
    ///
    /// let guess = Word::new("allot").unwrap();
    /// let secret = Word::new("apple").unwrap();
    /// let feedback = WordFeedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.letters(), &[Correct, Present, Absent, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let guess = guess.letters();
        let secret = secret.letters();
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // First pass: exact positions
        // Allow: Index needed to access guess[i], secret[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                result[i] = LetterFeedback::Correct;
                consumed[i] = true;
            }
        }

        // Second pass: misplaced letters, leftmost unconsumed match wins
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterFeedback::Correct {
                continue;
            }
            let matched = (0..WORD_LENGTH).find(|&j| !consumed[j] && guess[i] == secret[j]);
            if let Some(j) = matched {
                result[i] = LetterFeedback::Present;
                consumed[j] = true;
            }
        }

        Self(result)
    }

    /// Per-position feedback
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterFeedback::Correct)
    }

    /// Count the number of present letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterFeedback::Present)
    }

    fn count(&self, kind: LetterFeedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use multiwordle::core::WordFeedback;
    ///
    /// let p1 = WordFeedback::from_str("GY-GY").unwrap();
    /// let p2 = WordFeedback::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        let mut chars = s.chars();

        for slot in &mut result {
            *slot = LetterFeedback::from_char(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(result))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl std::str::FromStr for WordFeedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
