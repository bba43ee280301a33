//! Cache of word sets keyed by word length and reveal pattern
//!
//! The all-mystery pattern of every length is built eagerly from the
//! dictionary. Any other pattern is derived on first request by filtering
//! the smallest already-known parent, then kept for the lifetime of the
//! index. Later rounds that reach the same pattern reuse it untouched.

use super::StrategyError;
use super::word_set::{WordSet, WordSetBuilder};
use crate::core::{LetterSet, Pattern, Word};
use rustc_hash::FxHashMap;

/// Patterns of one word length
type PatternMap = FxHashMap<Pattern, WordSet>;

/// Word length → pattern → word set
#[derive(Debug, Default)]
pub struct PatternIndex {
    groups: FxHashMap<usize, PatternMap>,
}

impl PatternIndex {
    /// Index a dictionary under the all-mystery pattern of each word length
    ///
    /// The caller is expected to have deduplicated the words.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Pattern, Word};
    /// use hangman_solver::solver::PatternIndex;
    ///
    /// let words = ["cat", "car", "bat"].map(|w| Word::new(w).unwrap());
    /// let mut index = PatternIndex::new(words);
    ///
    /// let set = index.resolve(&Pattern::parse("-AT").unwrap()).unwrap();
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn new<I>(dictionary: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut roots: FxHashMap<usize, WordSetBuilder> = FxHashMap::default();
        for word in dictionary {
            roots
                .entry(word.len())
                .or_default()
                .update(word, LetterSet::EMPTY);
        }

        let groups: FxHashMap<usize, PatternMap> = roots
            .into_iter()
            .map(|(len, builder)| {
                let mut patterns = PatternMap::default();
                patterns.insert(Pattern::mystery(len), builder.seal());
                (len, patterns)
            })
            .collect();

        let index = Self { groups };
        log::info!(
            "{:<32}{} words over {} lengths",
            "indexed dictionary",
            index.word_count(),
            index.groups.len()
        );
        index
    }

    /// The word set for `pattern`, deriving and caching it if needed
    ///
    /// # Errors
    /// `UnknownLength` if no dictionary word has the pattern's length,
    /// `MissingParentPattern` if no ancestor set exists to filter from.
    pub fn resolve(&mut self, pattern: &Pattern) -> Result<&WordSet, StrategyError> {
        let group = self
            .groups
            .get_mut(&pattern.len())
            .ok_or(StrategyError::UnknownLength(pattern.len()))?;

        let cached = group.get(pattern).is_some_and(|set| !set.is_empty());
        if !cached {
            let derived = derive(group, pattern)?;
            log::trace!("{:<32}{:<24}{}", "derived pattern", pattern, derived.len());
            group.insert(pattern.clone(), derived);
        }

        Ok(&group[pattern])
    }

    /// Look up a cached word set without deriving anything
    #[must_use]
    pub fn get(&self, pattern: &Pattern) -> Option<&WordSet> {
        self.groups.get(&pattern.len())?.get(pattern)
    }

    /// Total number of patterns cached, roots included
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.groups.values().map(FxHashMap::len).sum()
    }

    /// Number of dictionary words indexed
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.groups
            .iter()
            .filter_map(|(&len, patterns)| patterns.get(&Pattern::mystery(len)))
            .map(WordSet::len)
            .sum()
    }

    /// Word lengths present in the dictionary, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.groups.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }
}

/// Build the word set for `pattern` from the cheapest known ancestor
///
/// Each distinct revealed letter gives one parent pattern; the smallest one
/// already cached wins. If none is cached (a pattern requested out of game
/// order), the all-mystery root of the same length is used, since every
/// pattern descends from it.
fn derive(group: &PatternMap, pattern: &Pattern) -> Result<WordSet, StrategyError> {
    let parent = pattern
        .parents()
        .filter_map(|p| group.get(&p))
        .min_by_key(|set| set.len())
        .or_else(|| group.get(&Pattern::mystery(pattern.len())))
        .ok_or_else(|| StrategyError::MissingParentPattern {
            pattern: pattern.to_string(),
        })?;

    let letters = pattern.letters();
    let mut builder = WordSetBuilder::new();
    for word in parent.words() {
        if pattern.matches(word, letters) {
            builder.update(word.clone(), letters);
        }
    }

    Ok(builder.seal())
}
