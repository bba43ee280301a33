//! Dictionary handling
//!
//! Loading word files and drawing random samples from them.

pub mod loader;
pub mod random;

pub use loader::{load_from_file, parse_dictionary, words_from_slice};
pub use random::{SampleError, random_words};
