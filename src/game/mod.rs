//! Hangman game state machine
//!
//! One [`HangmanGame`] is one round: a secret word, the pattern revealed so
//! far and the history of right and wrong guesses. The status is always
//! derived from that data, never stored.

mod guess;

pub use guess::Guess;

use crate::core::{LetterSet, Pattern, Word};
use crate::solver::{GuessingStrategy, StrategyError};
use std::collections::BTreeSet;
use std::fmt;

/// Score assigned to a lost game, whatever happened before
pub const LOST_SCORE: u32 = 25;

/// Current status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    GameWon,
    GameLost,
    KeepGuessing,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GameWon => "GAME_WON",
            Self::GameLost => "GAME_LOST",
            Self::KeepGuessing => "KEEP_GUESSING",
        })
    }
}

/// Error type for illegal moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A guess was made after the game had already ended
    IllegalState { status: GameStatus },
    /// A letter guess outside `A..=Z`
    InvalidLetter(char),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalState { status } => {
                write!(f, "Cannot keep guessing in current game state: {status}")
            }
            Self::InvalidLetter(ch) => write!(f, "'{ch}' is not a letter"),
        }
    }
}

impl std::error::Error for GameError {}

/// Anything that can abort a round in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    Game(GameError),
    Strategy(StrategyError),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Game(e) => write!(f, "game error: {e}"),
            Self::Strategy(e) => write!(f, "strategy error: {e}"),
        }
    }
}

impl std::error::Error for RoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Game(e) => Some(e),
            Self::Strategy(e) => Some(e),
        }
    }
}

impl From<GameError> for RoundError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

impl From<StrategyError> for RoundError {
    fn from(e: StrategyError) -> Self {
        Self::Strategy(e)
    }
}

/// A single round of Hangman
#[derive(Debug, Clone)]
pub struct HangmanGame {
    /// The word that needs to be guessed (e.g. `FACTUAL`)
    secret: Word,
    /// Letters revealed so far (e.g. `F-CTU-L`)
    revealed: Pattern,
    /// Exceeding this many wrong letter/word guesses loses the game
    max_wrong_guesses: u32,
    correct_letters: LetterSet,
    wrong_letters: LetterSet,
    wrong_words: BTreeSet<String>,
}

impl HangmanGame {
    /// Start a round for `secret` allowing `max_wrong_guesses` mistakes
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    /// use hangman_solver::game::{GameStatus, HangmanGame};
    ///
    /// let mut game = HangmanGame::new(Word::new("cat").unwrap(), 5);
    /// game.guess_letter('c').unwrap();
    /// game.guess_word("cat").unwrap();
    /// assert_eq!(game.status(), GameStatus::GameWon);
    /// assert_eq!(game.current_score(), 1);
    /// ```
    #[must_use]
    pub fn new(secret: Word, max_wrong_guesses: u32) -> Self {
        let revealed = Pattern::mystery(secret.len());
        Self {
            secret,
            revealed,
            max_wrong_guesses,
            correct_letters: LetterSet::new(),
            wrong_letters: LetterSet::new(),
            wrong_words: BTreeSet::new(),
        }
    }

    /// Guess a single letter and reveal every occurrence of it
    ///
    /// # Errors
    /// `IllegalState` if the game is over, `InvalidLetter` if `ch` is not an
    /// ASCII letter.
    pub fn guess_letter(&mut self, ch: char) -> Result<&Pattern, GameError> {
        self.assert_can_keep_guessing()?;

        if !ch.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(ch));
        }
        let letter = ch.to_ascii_uppercase() as u8;

        if self.revealed.reveal(self.secret.bytes(), letter) {
            self.correct_letters.insert(letter);
        } else {
            self.wrong_letters.insert(letter);
        }

        Ok(&self.revealed)
    }

    /// Guess the whole word
    ///
    /// # Errors
    /// `IllegalState` if the game is over.
    pub fn guess_word(&mut self, word: &str) -> Result<&Pattern, GameError> {
        self.assert_can_keep_guessing()?;

        let guess = word.to_ascii_uppercase();
        if guess == self.secret.text() {
            self.revealed.reveal_all(self.secret.bytes());
        } else {
            self.wrong_words.insert(guess);
        }

        Ok(&self.revealed)
    }

    /// Score for the current state; lower is better
    #[must_use]
    pub fn current_score(&self) -> u32 {
        if self.status() == GameStatus::GameLost {
            LOST_SCORE
        } else {
            self.wrong_guesses_made() + self.correct_letters.len() as u32
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.revealed.bytes() == self.secret.bytes() {
            GameStatus::GameWon
        } else if self.wrong_guesses_made() > self.max_wrong_guesses {
            GameStatus::GameLost
        } else {
            GameStatus::KeepGuessing
        }
    }

    /// Play the round to the end with `strategy`, returning the final score
    ///
    /// # Errors
    /// Propagates the first strategy or game error; the round is abandoned.
    pub fn run<S: GuessingStrategy + ?Sized>(&mut self, strategy: &mut S) -> Result<u32, RoundError> {
        while self.status() == GameStatus::KeepGuessing {
            log::debug!("{self}");
            let guess = strategy.next_guess(self)?;
            log::debug!("{guess}");
            guess.apply(self)?;
        }
        log::debug!("{self}");

        Ok(self.current_score())
    }

    #[must_use]
    pub fn wrong_guesses_made(&self) -> u32 {
        (self.wrong_letters.len() + self.wrong_words.len()) as u32
    }

    /// Wrong guesses still allowed before the game is lost
    #[must_use]
    pub fn wrong_guesses_remaining(&self) -> u32 {
        self.max_wrong_guesses
            .saturating_sub(self.wrong_guesses_made())
    }

    #[must_use]
    pub const fn max_wrong_guesses(&self) -> u32 {
        self.max_wrong_guesses
    }

    /// The pattern revealed so far
    #[must_use]
    pub const fn revealed(&self) -> &Pattern {
        &self.revealed
    }

    #[must_use]
    pub const fn correct_letters(&self) -> LetterSet {
        self.correct_letters
    }

    #[must_use]
    pub const fn wrong_letters(&self) -> LetterSet {
        self.wrong_letters
    }

    #[must_use]
    pub const fn all_guessed_letters(&self) -> LetterSet {
        self.correct_letters.union(self.wrong_letters)
    }

    #[must_use]
    pub const fn wrong_words(&self) -> &BTreeSet<String> {
        &self.wrong_words
    }

    #[must_use]
    pub fn secret_word_len(&self) -> usize {
        self.secret.len()
    }

    fn assert_can_keep_guessing(&self) -> Result<(), GameError> {
        match self.status() {
            GameStatus::KeepGuessing => Ok(()),
            status => Err(GameError::IllegalState { status }),
        }
    }
}

impl fmt::Display for HangmanGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; score={}; status={}",
            self.revealed,
            self.current_score(),
            self.status()
        )
    }
}
