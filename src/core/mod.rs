//! Core domain types for Hangman
//!
//! Words, reveal patterns and letter sets. Pure data with no I/O.

mod letters;
mod pattern;
mod word;

pub use letters::LetterSet;
pub use pattern::{Pattern, PatternError};
pub use word::{Word, WordError};
