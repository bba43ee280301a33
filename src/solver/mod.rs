//! Hangman guessing strategies
//!
//! The frequency solver keeps a [`PatternIndex`] of per-pattern word sets
//! and answers each turn from the set matching the revealed pattern.

mod engine;
mod error;
mod pattern_index;
pub mod strategy;
mod word_set;

pub use engine::Solver;
pub use error::StrategyError;
pub use pattern_index::PatternIndex;
pub use strategy::{GuessingStrategy, RandomStrategy, StrategyType};
pub use word_set::{LetterStat, Suggestion, WordSet, WordSetBuilder};
