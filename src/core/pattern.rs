//! Hangman reveal patterns
//!
//! A pattern is the revealed-so-far view of a secret word: every known
//! position holds its letter and every unknown position holds
//! [`Pattern::MYSTERY`]. For example `F-CTU-L` for `FACTUAL` after guessing
//! C, F, L, T and U.
//!
//! Because a game reveals *every* occurrence of a guessed letter, an unknown
//! position is more than "unknown": it is known not to hold any letter that
//! is already visible elsewhere in the pattern. [`Pattern::matches`] encodes
//! exactly that rule.

use super::{LetterSet, Word};
use std::fmt;

/// Revealed-letter pattern for a word in progress
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<u8>);

/// Error type for unparsable patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pattern must not be empty"),
            Self::InvalidCharacter(ch) => write!(
                f,
                "Pattern may only contain letters and '{}', got '{ch}'",
                char::from(Pattern::MYSTERY)
            ),
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Marker for positions that have not been revealed yet
    pub const MYSTERY: u8 = b'-';

    /// The fully unknown pattern of a given length (e.g. `-----`)
    #[must_use]
    pub fn mystery(len: usize) -> Self {
        Self(vec![Self::MYSTERY; len])
    }

    /// Parse a pattern such as `"ca-"` or `"F-CTU-L"`
    ///
    /// Letters are normalized to uppercase.
    ///
    /// # Errors
    /// Returns `PatternError` if the string is empty or contains anything
    /// other than ASCII letters and the mystery marker.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// let pattern = Pattern::parse("f-ctu-l").unwrap();
    /// assert_eq!(pattern.to_string(), "F-CTU-L");
    /// assert_eq!(pattern.blanks(), 2);
    ///
    /// assert!(Pattern::parse("F?CTUAL").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        s.chars()
            .map(|ch| {
                if ch.is_ascii_alphabetic() {
                    Ok(ch.to_ascii_uppercase() as u8)
                } else if ch == char::from(Self::MYSTERY) {
                    Ok(Self::MYSTERY)
                } else {
                    Err(PatternError::InvalidCharacter(ch))
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of unrevealed positions
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.0.iter().filter(|&&b| b == Self::MYSTERY).count()
    }

    /// Check whether every position is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.0.contains(&Self::MYSTERY)
    }

    /// The distinct letters already revealed anywhere in the pattern
    ///
    /// Given `AB-A--` this is `{A, B}`.
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.0.iter().copied().collect()
    }

    /// Check whether `word` is consistent with this pattern
    ///
    /// Revealed positions must hold the same letter, and unrevealed positions
    /// must not hold any of the pattern's `letters`. Given pattern `AB-`,
    /// `ABC` and `ABD` match while `ABA`, `ABB` and `XYZ` do not.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Pattern, Word};
    ///
    /// let pattern = Pattern::parse("AB-").unwrap();
    /// let letters = pattern.letters();
    /// assert!(pattern.matches(&Word::new("abc").unwrap(), letters));
    /// assert!(!pattern.matches(&Word::new("abb").unwrap(), letters));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word, letters: LetterSet) -> bool {
        self.len() == word.len()
            && self.0.iter().zip(word.bytes()).all(|(&p, &w)| {
                if p == Self::MYSTERY {
                    !letters.contains(w)
                } else {
                    p == w
                }
            })
    }

    /// Patterns that carry one letter less information than this one
    ///
    /// One parent per distinct revealed letter, built by turning every
    /// occurrence of that letter back into the mystery marker. `CAC-` yields
    /// `-A--` and `C-C-`.
    pub fn parents(&self) -> impl Iterator<Item = Self> + '_ {
        let mut seen = LetterSet::new();
        self.0.iter().filter_map(move |&letter| {
            if letter == Self::MYSTERY || !seen.insert(letter) {
                return None;
            }
            Some(Self(
                self.0
                    .iter()
                    .map(|&b| if b == letter { Self::MYSTERY } else { b })
                    .collect(),
            ))
        })
    }

    /// The word obtained by writing `letter` into the first blank
    #[must_use]
    pub fn fill_first_blank(&self, letter: u8) -> String {
        let mut filled = self.0.clone();
        if let Some(slot) = filled.iter_mut().find(|b| **b == Self::MYSTERY) {
            *slot = letter;
        }
        filled.into_iter().map(char::from).collect()
    }

    /// Reveal `letter` at every position where `secret` holds it
    ///
    /// Returns `true` if the letter occurs in the secret.
    pub(crate) fn reveal(&mut self, secret: &[u8], letter: u8) -> bool {
        let mut found = false;
        for (slot, &s) in self.0.iter_mut().zip(secret) {
            if s == letter {
                *slot = letter;
                found = true;
            }
        }
        found
    }

    pub(crate) fn reveal_all(&mut self, secret: &[u8]) {
        self.0.clear();
        self.0.extend_from_slice(secret);
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.0.iter().copied().map(char::from).collect();
        f.pad(&text)
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn mystery_pattern() {
        let pattern = Pattern::mystery(4);
        assert_eq!(pattern.to_string(), "----");
        assert_eq!(pattern.blanks(), 4);
        assert!(pattern.letters().is_empty());
        assert!(!pattern.is_complete());
    }

    #[test]
    fn parse_rejects_invalid() {
        assert_eq!(Pattern::parse(""), Err(PatternError::Empty));
        assert_eq!(
            Pattern::parse("A_B"),
            Err(PatternError::InvalidCharacter('_'))
        );
        assert!("C-T".parse::<Pattern>().is_ok());
    }

    #[test]
    fn letters_are_distinct_revealed_letters() {
        let pattern = Pattern::parse("AB-A--").unwrap();
        let letters = pattern.letters();
        assert_eq!(letters.len(), 2);
        assert!(letters.contains(b'A'));
        assert!(letters.contains(b'B'));
    }

    #[test]
    fn matches_revealed_positions() {
        let pattern = Pattern::parse("CA-").unwrap();
        let letters = pattern.letters();
        assert!(pattern.matches(&word("cat"), letters));
        assert!(pattern.matches(&word("car"), letters));
        assert!(!pattern.matches(&word("bat"), letters));
    }

    #[test]
    fn matches_rejects_pattern_letters_in_blanks() {
        // The blank cannot be A: every A would have been revealed.
        let pattern = Pattern::parse("-A-").unwrap();
        let letters = pattern.letters();
        assert!(pattern.matches(&word("cat"), letters));
        assert!(!pattern.matches(&word("aah"), letters));
        assert!(!pattern.matches(&word("baa"), letters));
    }

    #[test]
    fn matches_requires_equal_length() {
        let pattern = Pattern::mystery(3);
        assert!(!pattern.matches(&word("cats"), LetterSet::EMPTY));
    }

    #[test]
    fn parents_remove_one_letter_each() {
        let pattern = Pattern::parse("CAC-").unwrap();
        let parents: Vec<String> = pattern.parents().map(|p| p.to_string()).collect();
        assert_eq!(parents, vec!["-A--", "C-C-"]);
    }

    #[test]
    fn parents_of_mystery_pattern_are_empty() {
        assert_eq!(Pattern::mystery(5).parents().count(), 0);
    }

    #[test]
    fn fill_first_blank_only_fills_one() {
        let pattern = Pattern::parse("C--").unwrap();
        assert_eq!(pattern.fill_first_blank(b'A'), "CA-");
        let single = Pattern::parse("CA-").unwrap();
        assert_eq!(single.fill_first_blank(b'T'), "CAT");
    }

    #[test]
    fn reveal_marks_every_occurrence() {
        let mut pattern = Pattern::mystery(5);
        assert!(pattern.reveal(b"LLAMA", b'A'));
        assert_eq!(pattern.to_string(), "--A-A");
        assert!(!pattern.reveal(b"LLAMA", b'Z'));
        assert_eq!(pattern.to_string(), "--A-A");
        pattern.reveal_all(b"LLAMA");
        assert!(pattern.is_complete());
    }
}
