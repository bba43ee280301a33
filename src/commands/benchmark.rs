//! Benchmark command
//!
//! Plays many dictionary words through one strategy and aggregates scores.

use super::ScoreSummary;
use crate::core::Word;
use crate::game::{GameStatus, HangmanGame, RoundError};
use crate::solver::StrategyType;
use crate::wordlists::{SampleError, random_words};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How many of the worst-scoring words to keep
const WORST_WORDS: usize = 10;

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub wins: usize,
    pub losses: usize,
    pub scores: ScoreSummary,
    /// Score → number of rounds that ended with it
    pub distribution: BTreeMap<u32, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
    /// Patterns cached by the solver, if the strategy keeps any
    pub pattern_count: Option<usize>,
    /// Highest scores first, ties alphabetical
    pub worst_words: Vec<(String, u32)>,
}

/// Choose the words to benchmark
///
/// `sample` draws that many random words and wins over `limit`, which takes
/// a prefix of the dictionary. With neither, every word is played.
///
/// # Errors
/// Returns `SampleError` if `sample` is outside `1..=dictionary.len()`.
pub fn select_targets<R: Rng + ?Sized>(
    dictionary: &[Word],
    limit: Option<usize>,
    sample: Option<usize>,
    rng: &mut R,
) -> Result<Vec<Word>, SampleError> {
    match (sample, limit) {
        (Some(count), _) => random_words(dictionary, count, rng),
        (None, Some(limit)) => Ok(dictionary.iter().take(limit).cloned().collect()),
        (None, None) => Ok(dictionary.to_vec()),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

/// Play one round per target word
///
/// # Errors
/// Stops at the first round the strategy cannot finish.
pub fn run_benchmark(
    strategy: &mut StrategyType,
    target_words: &[Word],
    max_wrong_guesses: u32,
) -> Result<BenchmarkResult, RoundError> {
    let pb = progress_bar(target_words.len());
    let start = Instant::now();

    let mut scores = ScoreSummary::new();
    let mut wins = 0;
    let mut distribution: BTreeMap<u32, usize> = BTreeMap::new();
    let mut results: Vec<(String, u32)> = Vec::with_capacity(target_words.len());

    for (idx, target) in target_words.iter().enumerate() {
        let mut game = HangmanGame::new(target.clone(), max_wrong_guesses);
        let score = match game.run(strategy) {
            Ok(score) => score,
            Err(e) => {
                pb.abandon_with_message(format!("Failed on {target}"));
                return Err(e);
            }
        };

        if game.status() == GameStatus::GameWon {
            wins += 1;
        }
        scores.record(score);
        *distribution.entry(score).or_insert(0) += 1;
        results.push((target.text().to_string(), score));

        if idx % 100 == 0 {
            if let Some(avg) = scores.mean() {
                pb.set_message(format!("Avg: {avg:.2}"));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    results.sort_by(|(wa, sa), (wb, sb)| sb.cmp(sa).then_with(|| wa.cmp(wb)));
    results.truncate(WORST_WORDS);

    let total_words = target_words.len();
    let secs = duration.as_secs_f64();
    let result = BenchmarkResult {
        total_words,
        wins,
        losses: total_words - wins,
        scores,
        distribution,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
        pattern_count: strategy.solver().map(|s| s.index().pattern_count()),
        worst_words: results,
    };

    log::info!(
        "{:<32}{} words in {:.2}s",
        "benchmark finished",
        result.total_words,
        secs
    );
    Ok(result)
}
