//! Terminal output formatting
//!
//! Plain result lines for the play command and a colored report for
//! benchmarks.

pub mod display;
pub mod formatters;

pub use display::print_benchmark_result;
pub use formatters::{format_general, format_round, format_summary};
