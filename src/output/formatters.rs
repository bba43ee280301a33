//! Formatting utilities for terminal output

use crate::commands::ScoreSummary;

/// Separator printed above the play totals
pub const SUMMARY_RULE: &str = "-----------------------------";

/// Significant digits used by [`format_general`]
const PRECISION: i32 = 6;

/// Format a float the way C's `%g` does
///
/// Six significant digits, trailing zeros dropped, scientific notation for
/// very large or very small magnitudes.
///
/// # Examples
/// ```
/// use hangman_solver::output::formatters::format_general;
///
/// assert_eq!(format_general(8.0), "8");
/// assert_eq!(format_general(22.0 / 3.0), "7.33333");
/// assert_eq!(format_general(0.5), "0.5");
/// ```
#[must_use]
pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Exponent after rounding to the requested precision
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            strip_zeros(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        strip_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// One round's result line, e.g. `CAT = 4`
#[must_use]
pub fn format_round(word: &str, score: u32) -> String {
    format!("{word} = {score}")
}

/// Totals block printed after the last round
///
/// Returns `None` when no round was played.
///
/// # Examples
/// ```
/// use hangman_solver::commands::ScoreSummary;
/// use hangman_solver::output::formatters::format_summary;
///
/// let summary: ScoreSummary = [4, 6].into_iter().collect();
/// assert_eq!(
///     format_summary(&summary).unwrap(),
///     "-----------------------------\nAVG: 5\nNUM: 2\nTOTAL: 10"
/// );
/// ```
#[must_use]
pub fn format_summary(summary: &ScoreSummary) -> Option<String> {
    let mean = summary.mean()?;
    Some(format!(
        "{SUMMARY_RULE}\nAVG: {}\nNUM: {}\nTOTAL: {}",
        format_general(mean),
        summary.count(),
        summary.total()
    ))
}

/// Filled and empty cell counts for a bar of `width` cells
#[must_use]
pub fn bar_cells(value: f64, max: f64, width: usize) -> (usize, usize) {
    if max <= 0.0 {
        return (0, width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);
    (filled, width - filled)
}
