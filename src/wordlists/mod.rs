//! Word lists for drawing random secrets
//!
//! Provides an embedded pool compiled into the binary, plus file loading for
//! custom pools.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

use crate::core::{Secret, SecretError, Word};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Draw `count` distinct words from `pool` as a secret
///
/// # Errors
///
/// Returns `SecretError::Empty` if `count` is zero or the pool is empty.
/// If the pool holds fewer than `count` words, every word is used once.
///
/// # Examples
/// ```
/// use multiwordle::wordlists::{ANSWERS, loader::words_from_slice, random_secret};
///
/// let pool = words_from_slice(ANSWERS);
/// let secret = random_secret(&pool, 3, &mut rand::rng()).unwrap();
/// assert_eq!(secret.len(), 3);
/// ```
pub fn random_secret<R: Rng + ?Sized>(
    pool: &[Word],
    count: usize,
    rng: &mut R,
) -> Result<Secret, SecretError> {
    Secret::from_words(pool.choose_multiple(rng, count).map(Word::text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All answers should be 5 letters, uppercase
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn answers_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS.len());
    }

    #[test]
    fn random_secret_draws_distinct_pool_words() {
        let pool = words_from_slice(ANSWERS);
        let mut rng = StdRng::seed_from_u64(7);

        let secret = random_secret(&pool, 4, &mut rng).unwrap();

        assert_eq!(secret.len(), 4);
        for word in secret.words() {
            assert!(pool.contains(word));
        }
        let unique: std::collections::HashSet<_> = secret.words().iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn random_secret_is_deterministic_for_seed() {
        let pool = words_from_slice(ANSWERS);
        let a = random_secret(&pool, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = random_secret(&pool, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_secret_zero_words() {
        let pool = words_from_slice(ANSWERS);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_secret(&pool, 0, &mut rng), Err(SecretError::Empty));
        assert_eq!(random_secret(&[], 2, &mut rng), Err(SecretError::Empty));
    }

    #[test]
    fn file_pool_with_repeats_yields_distinct_secret() {
        let path = std::env::temp_dir().join(format!("multiwordle-pool-{}.txt", std::process::id()));
        std::fs::write(&path, "apple\napple\nmango\nAPPLE\nmango\n").unwrap();
        let pool = crate::wordlists::loader::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(pool.len(), 2);
        let secret = random_secret(&pool, 2, &mut StdRng::seed_from_u64(9)).unwrap();
        let unique: std::collections::HashSet<_> = secret.words().iter().collect();
        assert_eq!(unique.len(), 2);
    }

    #[test]
    fn random_secret_small_pool_uses_each_word_once() {
        let pool = words_from_slice(&["apple", "mango"]);
        let secret = random_secret(&pool, 5, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(secret.len(), 2);
    }
}
