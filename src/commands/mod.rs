//! Command implementations

pub mod benchmark;
pub mod play;
pub mod random;
mod summary;

pub use benchmark::{BenchmarkResult, run_benchmark, select_targets};
pub use play::{PlayConfig, Terminal, run_play};
pub use random::run_random;
pub use summary::ScoreSummary;
