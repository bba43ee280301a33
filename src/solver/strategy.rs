//! Guessing strategies
//!
//! Defines the `GuessingStrategy` trait and the runtime-selectable
//! `StrategyType` wrapper.

use super::{Solver, StrategyError};
use crate::core::Word;
use crate::game::{Guess, HangmanGame};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// A strategy for generating guesses given the current state of a game
pub trait GuessingStrategy {
    /// Produce the next guess for a game that is still in progress
    ///
    /// # Errors
    /// Returns `StrategyError` when the strategy cannot find any guess, which
    /// means the dictionary contradicts the game.
    fn next_guess(&mut self, game: &HangmanGame) -> Result<Guess, StrategyError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug)]
pub enum StrategyType {
    /// Letter-frequency solver (default)
    Frequency(Solver),
    /// Uniformly random unguessed letters, as a baseline
    Random(RandomStrategy),
}

impl GuessingStrategy for StrategyType {
    fn next_guess(&mut self, game: &HangmanGame) -> Result<Guess, StrategyError> {
        match self {
            Self::Frequency(s) => s.next_guess(game),
            Self::Random(s) => s.next_guess(game),
        }
    }
}

impl StrategyType {
    /// Create a strategy from its name
    ///
    /// Supported names: "frequency", "random". Defaults to frequency if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, dictionary: Vec<Word>) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy::new()),
            _ => Self::Frequency(Solver::new(dictionary)),
        }
    }

    /// The solver behind this strategy, if it is the frequency one
    #[must_use]
    pub const fn solver(&self) -> Option<&Solver> {
        match self {
            Self::Frequency(s) => Some(s),
            Self::Random(_) => None,
        }
    }
}

/// Random letter selection
///
/// Ignores the dictionary and never guesses words.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible variant for tests and benchmarks
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessingStrategy for RandomStrategy {
    fn next_guess(&mut self, game: &HangmanGame) -> Result<Guess, StrategyError> {
        let guessed = game.all_guessed_letters();
        let unguessed: Vec<u8> = (b'A'..=b'Z').filter(|&l| !guessed.contains(l)).collect();

        unguessed
            .choose(&mut self.rng)
            .map(|&letter| Guess::Letter(char::from(letter)))
            .ok_or(StrategyError::ExhaustedSuggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    fn dictionary() -> Vec<Word> {
        ["cat", "car", "bat"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect()
    }

    #[test]
    fn from_name_selects_strategy() {
        assert!(matches!(
            StrategyType::from_name("random", dictionary()),
            StrategyType::Random(_)
        ));
        assert!(matches!(
            StrategyType::from_name("frequency", dictionary()),
            StrategyType::Frequency(_)
        ));
        assert!(matches!(
            StrategyType::from_name("unknown", dictionary()),
            StrategyType::Frequency(_)
        ));
    }

    #[test]
    fn solver_accessor() {
        assert!(StrategyType::from_name("frequency", dictionary()).solver().is_some());
        assert!(StrategyType::from_name("random", dictionary()).solver().is_none());
    }

    #[test]
    fn random_never_repeats_letters() {
        let mut strategy = RandomStrategy::with_seed(7);
        let mut game = HangmanGame::new(Word::new("quiz").unwrap(), 30);
        let mut seen = Vec::new();
        while game.status() == GameStatus::KeepGuessing {
            let Guess::Letter(ch) = strategy.next_guess(&game).unwrap() else {
                panic!("random strategy guessed a word");
            };
            assert!(!seen.contains(&ch));
            seen.push(ch);
            game.guess_letter(ch).unwrap();
        }
        assert_eq!(game.status(), GameStatus::GameWon);
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let game = HangmanGame::new(Word::new("cat").unwrap(), 5);
        let a = RandomStrategy::with_seed(42).next_guess(&game);
        let b = RandomStrategy::with_seed(42).next_guess(&game);
        assert_eq!(a, b);
    }

    #[test]
    fn strategies_run_through_the_wrapper() {
        let mut strategy = StrategyType::from_name("frequency", dictionary());
        let mut game = HangmanGame::new(Word::new("bat").unwrap(), 5);
        game.run(&mut strategy).unwrap();
        assert_eq!(game.status(), GameStatus::GameWon);
    }
}
