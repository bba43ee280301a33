//! Random word selection

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Requested sample size is outside `1..=available`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleError {
    pub requested: usize,
    pub available: usize,
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Number of words must be between 1 and {} (got {})",
            self.available, self.requested
        )
    }
}

impl std::error::Error for SampleError {}

/// Pick `count` distinct words uniformly at random
///
/// # Errors
/// Returns `SampleError` unless `1 <= count <= dictionary.len()`.
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::{random_words, words_from_slice};
///
/// let dictionary = words_from_slice(&["cat", "car", "bat"]);
/// let picked = random_words(&dictionary, 2, &mut rand::rng()).unwrap();
/// assert_eq!(picked.len(), 2);
/// assert_ne!(picked[0], picked[1]);
///
/// assert!(random_words(&dictionary, 4, &mut rand::rng()).is_err());
/// ```
pub fn random_words<R: Rng + ?Sized>(
    dictionary: &[Word],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Word>, SampleError> {
    if count == 0 || count > dictionary.len() {
        return Err(SampleError {
            requested: count,
            available: dictionary.len(),
        });
    }

    Ok(dictionary.choose_multiple(rng, count).cloned().collect())
}
