//! Compact letter sets
//!
//! A `LetterSet` holds any subset of `A..=Z` as a 26-bit mask, which keeps
//! exclusion checks in the hot suggestion loops to a single AND.

use std::fmt;

const ALPHABET_LEN: u8 = 26;

/// A set of uppercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    const fn mask(letter: u8) -> Option<u32> {
        if letter.is_ascii_uppercase() {
            Some(1 << (letter - b'A'))
        } else {
            None
        }
    }

    /// Insert a letter, returning `true` if it was not already present
    ///
    /// Anything outside `A..=Z` is ignored and reports `false`.
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        match Self::mask(letter) {
            Some(bit) if self.0 & bit == 0 => {
                self.0 |= bit;
                true
            }
            _ => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::mask(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    /// Check whether any byte of `bytes` is in the set
    #[inline]
    #[must_use]
    pub fn contains_any(self, bytes: &[u8]) -> bool {
        bytes.iter().any(|&b| self.contains(b))
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_LEN)
            .filter(move |i| self.0 & (1 << i) != 0)
            .map(|i| b'A' + i)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl Extend<u8> for LetterSet {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for letter in iter {
            self.insert(letter);
        }
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", char::from(letter))?;
        }
        f.write_str("}")
    }
}
