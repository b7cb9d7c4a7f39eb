//! The secret sentence: a non-empty sequence of five-letter words

use super::{Word, WordError};
use std::fmt;

/// Validated, uppercase secret words
///
/// Construction is the only place a secret is checked, so a `Secret` can be
/// installed into a game without further validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    words: Vec<Word>,
}

/// Error type for a malformed secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    Empty,
    InvalidWord {
        index: usize,
        word: String,
        source: WordError,
    },
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "secret must contain at least one word"),
            Self::InvalidWord { index, word, source } => {
                write!(f, "secret word {} '{word}' is invalid: {source}", index + 1)
            }
        }
    }
}

impl std::error::Error for SecretError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::InvalidWord { source, .. } => Some(source),
        }
    }
}

impl Secret {
    /// Parse a whitespace-separated list of words
    ///
    /// # Errors
    /// Returns `SecretError::Empty` if there are no words, or
    /// `SecretError::InvalidWord` naming the first word that is not exactly
    /// five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use multiwordle::core::Secret;
    ///
    /// let secret = Secret::parse("apple  mango").unwrap();
    /// assert_eq!(secret.texts(), vec!["APPLE", "MANGO"]);
    ///
    /// assert!(Secret::parse("apple plan").is_err());
    /// assert!(Secret::parse("   ").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, SecretError> {
        Self::from_words(input.split_whitespace())
    }

    /// Build a secret from individual words
    ///
    /// # Errors
    /// Same conditions as [`Secret::parse`].
    pub fn from_words<I, S>(words: I) -> Result<Self, SecretError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .enumerate()
            .map(|(index, word)| {
                let word = word.as_ref();
                Word::new(word).map_err(|source| SecretError::InvalidWord {
                    index,
                    word: word.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(SecretError::Empty);
        }

        Ok(Self { words })
    }

    /// The secret words, in order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the sentence
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: an empty secret cannot be constructed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The secret words as owned uppercase strings
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.words.iter().map(|w| w.text().to_string()).collect()
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for word in &self.words {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{word}")?;
            first = false;
        }
        Ok(())
    }
}
