//! Dictionary loading utilities
//!
//! A dictionary file is any whitespace-separated list of words. Tokens are
//! uppercased and deduplicated; tokens that are not purely alphabetic are
//! skipped.

use crate::core::Word;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// Returns the distinct valid words in sorted order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_dictionary(&content);
    log::info!(
        "{:<32}{} words from {}",
        "loaded dictionary",
        words.len(),
        path.display()
    );
    Ok(words)
}

/// Parse dictionary text into distinct, sorted words
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::parse_dictionary;
///
/// let words = parse_dictionary("cat Car\nbat\n\ncat x-ray");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["BAT", "CAR", "CAT"]);
/// ```
#[must_use]
pub fn parse_dictionary(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: BTreeSet<Word> = content
        .split_whitespace()
        .filter_map(|token| {
            Word::new(token)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        log::warn!("skipped {skipped} dictionary tokens that are not plain words");
    }

    words.into_iter().collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "car", "b4t"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Check whether a sorted dictionary contains `word`
#[must_use]
pub fn contains(dictionary: &[Word], word: &str) -> bool {
    dictionary
        .binary_search_by(|w| w.text().cmp(word))
        .is_ok()
}
