//! Word groups sharing one reveal pattern
//!
//! A word set is built in two phases. A [`WordSetBuilder`] accepts words and
//! accumulates per-letter statistics; [`WordSetBuilder::seal`] turns it into
//! a read-only [`WordSet`] whose letter ranking is computed on first use and
//! then frozen. Sets are cached across rounds, so the sealed type has no
//! mutators at all.

use super::StrategyError;
use crate::core::{LetterSet, Word};
use rustc_hash::FxHashMap;
use std::cell::OnceCell;
use std::cmp::Ordering;

/// Occurrence counters for one letter within a word set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterStat {
    /// Occurrences across all words
    pub frequency: u32,
    /// Number of words containing the letter at least once
    pub word_count: u32,
}

impl LetterStat {
    /// Ranking order: higher frequency first, then fewer containing words
    ///
    /// Of two equally frequent letters, the one concentrated in fewer words
    /// splits the set more sharply.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then(self.word_count.cmp(&other.word_count))
    }
}

/// Next suggested letter and where to resume scanning the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub letter: u8,
    pub next_rank: usize,
}

/// Mutable phase of a word set
#[derive(Debug, Default)]
pub struct WordSetBuilder {
    words: Vec<Word>,
    stats: FxHashMap<u8, LetterStat>,
}

impl WordSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word and count its letters, skipping those in `excluded`
    ///
    /// A letter repeated within the word raises its frequency once per
    /// occurrence but its word count only once.
    pub fn update(&mut self, word: Word, excluded: LetterSet) {
        let mut parsed = LetterSet::new();
        for &letter in word.bytes() {
            if excluded.contains(letter) {
                continue;
            }
            let stat = self.stats.entry(letter).or_default();
            stat.frequency += 1;
            if parsed.insert(letter) {
                stat.word_count += 1;
            }
        }
        self.words.push(word);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Finish building; the statistics are read-only from here on
    #[must_use]
    pub fn seal(self) -> WordSet {
        WordSet {
            words: self.words,
            stats: self.stats,
            ranking: OnceCell::new(),
        }
    }
}

/// Read-only phase of a word set
#[derive(Debug)]
pub struct WordSet {
    words: Vec<Word>,
    stats: FxHashMap<u8, LetterStat>,
    ranking: OnceCell<Box<[u8]>>,
}

impl WordSet {
    /// Member words in insertion order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Statistics for `letter`, if it was counted at all
    #[must_use]
    pub fn stat(&self, letter: u8) -> Option<LetterStat> {
        self.stats.get(&letter).copied()
    }

    #[cfg(test)]
    pub(crate) fn is_ranked(&self) -> bool {
        self.ranking.get().is_some()
    }

    /// Counted letters from most to least promising
    ///
    /// Ties on both counters fall back to alphabetical order so the ranking
    /// is reproducible.
    pub fn ranking(&self) -> &[u8] {
        self.ranking.get_or_init(|| {
            let mut order: Vec<(u8, LetterStat)> =
                self.stats.iter().map(|(&l, &s)| (l, s)).collect();
            order.sort_by(|(la, a), (lb, b)| a.rank_cmp(b).then(la.cmp(lb)));
            order.into_iter().map(|(letter, _)| letter).collect()
        })
    }

    /// Suggest the most probable letter not in `excluded`
    ///
    /// Scanning starts at `start_rank`; the returned `next_rank` lets a caller
    /// that rejects the suggestion resume where this call stopped instead of
    /// rescanning from the top.
    ///
    /// # Errors
    /// `ExhaustedSuggestions` if every remaining ranked letter is excluded.
    pub fn suggest(
        &self,
        excluded: LetterSet,
        start_rank: usize,
    ) -> Result<Suggestion, StrategyError> {
        self.ranking()
            .iter()
            .enumerate()
            .skip(start_rank)
            .find(|&(_, &letter)| !excluded.contains(letter))
            .map(|(rank, &letter)| Suggestion {
                letter,
                next_rank: rank + 1,
            })
            .ok_or(StrategyError::ExhaustedSuggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[&str], excluded: &[u8]) -> WordSet {
        let excluded: LetterSet = excluded.iter().copied().collect();
        let mut builder = WordSetBuilder::new();
        for w in words {
            builder.update(Word::new(w).unwrap(), excluded);
        }
        builder.seal()
    }

    #[test]
    fn update_counts_frequency_and_word_count() {
        let set = build(&["LLAMA", "ALPHA"], &[]);
        assert_eq!(
            set.stat(b'A'),
            Some(LetterStat {
                frequency: 4,
                word_count: 2
            })
        );
        assert_eq!(
            set.stat(b'L'),
            Some(LetterStat {
                frequency: 3,
                word_count: 2
            })
        );
        assert_eq!(
            set.stat(b'M'),
            Some(LetterStat {
                frequency: 1,
                word_count: 1
            })
        );
        assert_eq!(set.stat(b'Z'), None);
    }

    #[test]
    fn update_skips_excluded_letters() {
        let set = build(&["CAT", "CAR"], b"CA");
        assert_eq!(set.stat(b'C'), None);
        assert_eq!(set.stat(b'A'), None);
        assert_eq!(set.len(), 2);
        assert_eq!(set.ranking(), b"RT");
    }

    #[test]
    fn words_keep_insertion_order() {
        let set = build(&["DOG", "CAT", "BAT"], &[]);
        let texts: Vec<&str> = set.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["DOG", "CAT", "BAT"]);
    }

    #[test]
    fn ranking_orders_by_frequency_then_word_count() {
        // E: freq 2 in 1 word, T: freq 2 in 2 words, S: freq 1
        let set = build(&["TEE", "ST"], &[]);
        assert_eq!(set.ranking(), b"ETS");
    }

    #[test]
    fn ranking_breaks_full_ties_alphabetically() {
        let set = build(&["CAT", "CAR", "BAT"], &[]);
        assert_eq!(set.ranking(), b"ACTBR");
    }

    #[test]
    fn ranking_is_computed_lazily_once() {
        let set = build(&["CAT"], &[]);
        assert!(!set.is_ranked());
        let first = set.ranking().as_ptr();
        assert!(set.is_ranked());
        assert_eq!(set.ranking().as_ptr(), first);
    }

    #[test]
    fn suggest_skips_excluded_and_resumes() {
        let set = build(&["CAT", "CAR", "BAT"], &[]);
        let first = set.suggest(LetterSet::EMPTY, 0).unwrap();
        assert_eq!(first.letter, b'A');
        assert_eq!(first.next_rank, 1);

        let excluded: LetterSet = b"C".iter().copied().collect();
        let next = set.suggest(excluded, first.next_rank).unwrap();
        assert_eq!(next.letter, b'T');
        assert_eq!(next.next_rank, 3);
    }

    #[test]
    fn suggest_is_deterministic() {
        let set = build(&["CAT", "CAR", "BAT", "COT", "CUR"], &[]);
        let excluded: LetterSet = b"AU".iter().copied().collect();
        assert_eq!(set.suggest(excluded, 1), set.suggest(excluded, 1));
    }

    #[test]
    fn suggest_exhausted() {
        let set = build(&["AB"], &[]);
        let all: LetterSet = b"AB".iter().copied().collect();
        assert_eq!(
            set.suggest(all, 0),
            Err(StrategyError::ExhaustedSuggestions)
        );
        assert_eq!(
            set.suggest(LetterSet::EMPTY, 2),
            Err(StrategyError::ExhaustedSuggestions)
        );
        assert_eq!(
            build(&[], &[]).suggest(LetterSet::EMPTY, 0),
            Err(StrategyError::ExhaustedSuggestions)
        );
    }

    #[test]
    fn builder_tracks_length() {
        let mut builder = WordSetBuilder::new();
        assert!(builder.is_empty());
        builder.update(Word::new("cat").unwrap(), LetterSet::EMPTY);
        assert_eq!(builder.len(), 1);
        assert!(!builder.seal().is_empty());
    }
}
