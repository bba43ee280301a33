//! Display functions for command results

use super::formatters::{bar_cells, format_general};
use crate::commands::BenchmarkResult;
use colored::Colorize;

/// Width of the distribution bars
const BAR_WIDTH: usize = 40;

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if result.total_words == 0 {
        println!("\n   No words played.");
        return;
    }

    let pct = |n: usize| n as f64 / result.total_words as f64 * 100.0;

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words played:     {}", result.total_words);
    println!(
        "   Won:              {} {}",
        result.wins,
        format!("({:.1}%)", pct(result.wins)).green()
    );
    if result.losses > 0 {
        println!(
            "   Lost:             {} {}",
            result.losses,
            format!("({:.1}%)", pct(result.losses)).red()
        );
    }
    if let Some(mean) = result.scores.mean() {
        println!(
            "   Average score:    {}",
            format_general(mean).bright_yellow().bold()
        );
    }
    if let (Some(min), Some(max)) = (result.scores.min(), result.scores.max()) {
        println!("   Best score:       {}", min.to_string().green());
        println!("   Worst score:      {}", max.to_string().yellow());
    }
    println!("   Total score:      {}", result.scores.total());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);
    if let Some(patterns) = result.pattern_count {
        println!("   Patterns cached:  {patterns}");
    }

    println!("\n📈 {}", "Score distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for (&score, &count) in &result.distribution {
        let (filled, empty) = bar_cells(count as f64, max_count as f64, BAR_WIDTH);
        println!(
            "   {score:>2}: {}{} {count:5} ({:5.1}%)",
            "█".repeat(filled).green(),
            "░".repeat(empty).bright_black(),
            pct(count)
        );
    }

    if !result.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest words:".yellow().bold());
        for (word, score) in &result.worst_words {
            println!("   {} ({score})", word.yellow());
        }
    }
}
