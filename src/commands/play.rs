//! Play command
//!
//! Reads secret words, plays one round per word through a single strategy
//! and prints each score followed by the totals.

use super::ScoreSummary;
use crate::core::Word;
use crate::game::HangmanGame;
use crate::output::formatters::{format_round, format_summary};
use crate::solver::GuessingStrategy;
use crate::wordlists::loader::contains;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Resolved settings shared by the commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    pub dict_path: PathBuf,
    pub max_wrong_guesses: u32,
    pub debug: bool,
}

impl PlayConfig {
    pub const DEFAULT_MAX_WRONG_GUESSES: u32 = 5;

    /// Build a config, replacing a wrong-guess budget below 1 with the default
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::commands::PlayConfig;
    ///
    /// assert_eq!(PlayConfig::new("words.txt", 8, false).max_wrong_guesses, 8);
    /// assert_eq!(PlayConfig::new("words.txt", 0, false).max_wrong_guesses, 5);
    /// assert_eq!(PlayConfig::new("words.txt", -3, false).max_wrong_guesses, 5);
    /// ```
    pub fn new(dict_path: impl Into<PathBuf>, max_wrong_guesses: i64, debug: bool) -> Self {
        let max_wrong_guesses = u32::try_from(max_wrong_guesses)
            .ok()
            .filter(|&n| n >= 1)
            .unwrap_or(Self::DEFAULT_MAX_WRONG_GUESSES);
        Self {
            dict_path: dict_path.into(),
            max_wrong_guesses,
            debug,
        }
    }
}

/// Where the play command reads words and writes results
pub struct Terminal<R, W, E> {
    pub input: R,
    pub output: W,
    pub errors: E,
    /// Prompt for each line on `errors`
    pub interactive: bool,
}

/// Play every word read from `terminal.input`
///
/// Words are whitespace-separated and case-insensitive. Words missing from
/// the dictionary are reported on `terminal.errors` and skipped.
///
/// # Errors
/// I/O failures, or a round the strategy cannot finish.
pub fn run_play<S, R, W, E>(
    strategy: &mut S,
    dictionary: &[Word],
    config: &PlayConfig,
    terminal: &mut Terminal<R, W, E>,
) -> Result<ScoreSummary>
where
    S: GuessingStrategy + ?Sized,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = ScoreSummary::new();
    let mut line = String::new();

    loop {
        if terminal.interactive {
            writeln!(terminal.errors, "Enter a word:")?;
        }

        line.clear();
        if terminal.input.read_line(&mut line)? == 0 {
            break;
        }

        for token in line.split_whitespace() {
            let word = token.to_ascii_uppercase();
            if !contains(dictionary, &word) {
                writeln!(terminal.errors, "Word '{word}' is not in dictionary!")?;
                continue;
            }

            log::debug!("New game [{word}]");
            let secret = Word::new(&word)?;
            let mut game = HangmanGame::new(secret, config.max_wrong_guesses);
            let score = game
                .run(strategy)
                .with_context(|| format!("Failed to play '{word}'"))?;

            summary.record(score);
            writeln!(terminal.output, "{}", format_round(&word, score))?;
        }
    }

    if let Some(totals) = format_summary(&summary) {
        writeln!(terminal.output, "{totals}")?;
    }
    terminal.output.flush()?;

    Ok(summary)
}
