//! Guesses a strategy can make

use super::{GameError, HangmanGame};
use std::fmt;

/// A single move: one letter or a whole word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Letter(char),
    Word(String),
}

impl Guess {
    /// Apply this guess to `game`
    ///
    /// # Errors
    /// Whatever the game rejects, see [`HangmanGame::guess_letter`] and
    /// [`HangmanGame::guess_word`].
    pub fn apply(&self, game: &mut HangmanGame) -> Result<(), GameError> {
        match self {
            Self::Letter(ch) => game.guess_letter(*ch).map(|_| ()),
            Self::Word(word) => game.guess_word(word).map(|_| ()),
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(ch) => write!(f, "GuessLetter[{ch}]"),
            Self::Word(word) => write!(f, "GuessWord[{word}]"),
        }
    }
}
