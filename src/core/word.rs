//! Hangman word representation
//!
//! A Word is a validated, uppercase dictionary word. The text lives behind an
//! `Arc` because the same word is shared by every `WordSet` it belongs to.

use super::LetterSet;
use std::fmt;
use std::sync::Arc;

/// An uppercase ASCII-alphabetic word of any non-zero length
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Arc<str>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new("factual").unwrap();
    /// assert_eq!(word.text(), "FACTUAL");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("h4ngman").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: Arc::from(text.to_ascii_uppercase()),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.bytes().contains(&letter)
    }

    /// Check if the word contains any letter of `letters`
    #[inline]
    #[must_use]
    pub fn has_any(&self, letters: LetterSet) -> bool {
        letters.contains_any(self.bytes())
    }

    /// The distinct letters of the word
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.bytes().iter().copied().collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
