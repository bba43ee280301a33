//! Hangman Solver
//!
//! Plays Hangman against a dictionary, guessing the most frequent unguessed
//! letter among the words that still fit the revealed pattern and switching
//! to whole-word guesses when that is at least as cheap.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::Word;
//! use hangman_solver::game::{GameStatus, HangmanGame};
//! use hangman_solver::solver::Solver;
//!
//! let dictionary = ["factual", "factory", "justice"].map(|w| Word::new(w).unwrap());
//! let mut solver = Solver::new(dictionary);
//!
//! let mut game = HangmanGame::new(Word::new("factual").unwrap(), 5);
//! let score = game.run(&mut solver).unwrap();
//! assert_eq!(game.status(), GameStatus::GameWon);
//! println!("{} = {score}", game.revealed());
//! ```

// Core domain types
pub mod core;

// Game rules and scoring
pub mod game;

// Guessing strategies
pub mod solver;

// Dictionary loading and sampling
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
