//! Frequency-driven Hangman solver

use super::pattern_index::PatternIndex;
use super::strategy::GuessingStrategy;
use super::word_set::WordSet;
use super::StrategyError;
use crate::core::{LetterSet, Pattern, Word};
use crate::game::{Guess, HangmanGame};

/// Main Hangman solver
///
/// Guesses the most frequent unguessed letter among the dictionary words
/// still consistent with the revealed pattern, and switches to whole-word
/// guesses when that is at least as cheap. The pattern index is kept across
/// games, so each pattern's statistics are computed once per solver.
#[derive(Debug)]
pub struct Solver {
    index: PatternIndex,
}

impl Solver {
    /// Create a solver over a deduplicated dictionary
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    /// use hangman_solver::game::HangmanGame;
    /// use hangman_solver::solver::Solver;
    ///
    /// let dictionary = ["cat", "car", "bat"].map(|w| Word::new(w).unwrap());
    /// let mut solver = Solver::new(dictionary);
    ///
    /// let mut game = HangmanGame::new(Word::new("cat").unwrap(), 5);
    /// let score = game.run(&mut solver).unwrap();
    /// assert!(score <= 4);
    /// ```
    pub fn new<I>(dictionary: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        Self {
            index: PatternIndex::new(dictionary),
        }
    }

    /// The pattern cache built so far
    #[must_use]
    pub const fn index(&self) -> &PatternIndex {
        &self.index
    }

    /// Pick a letter or word for a set with several candidates
    fn suggest(
        pattern: &Pattern,
        word_set: &WordSet,
        game: &HangmanGame,
    ) -> Result<Guess, StrategyError> {
        let wrong_letters = game.wrong_letters();

        if pattern.blanks() > 1 {
            if game.wrong_guesses_remaining() == 0 {
                let word = Self::final_blow(word_set, wrong_letters)?;
                Ok(Guess::Word(word.text().to_string()))
            } else {
                let suggestion = word_set.suggest(wrong_letters, 0)?;
                Ok(Guess::Letter(char::from(suggestion.letter)))
            }
        } else {
            Self::probe_last_blank(pattern, word_set, game).map(Guess::Word)
        }
    }

    /// Guess a whole word when a single letter is missing
    ///
    /// Filling the blank with the best letter costs the same as guessing the
    /// letter, and wins outright when right. Words already guessed wrong are
    /// skipped by excluding their letter and resuming the ranking; the rank
    /// cursor only moves forward, so this ends after at most one pass.
    fn probe_last_blank(
        pattern: &Pattern,
        word_set: &WordSet,
        game: &HangmanGame,
    ) -> Result<String, StrategyError> {
        let mut excluded = game.wrong_letters();
        let mut rank = 0;
        loop {
            let suggestion = word_set.suggest(excluded, rank)?;
            let candidate = pattern.fill_first_blank(suggestion.letter);
            if !game.wrong_words().contains(&candidate) {
                return Ok(candidate);
            }
            excluded.insert(suggestion.letter);
            rank = suggestion.next_rank;
        }
    }

    /// Choose a whole word for the last allowed mistake
    ///
    /// Among the words that contain no known-wrong letter, take the first one
    /// holding the most probable letter; failing that, fall down the ranking
    /// until some safe word holds the suggested letter.
    fn final_blow(word_set: &WordSet, wrong_letters: LetterSet) -> Result<&Word, StrategyError> {
        let mut suggestion = word_set.suggest(wrong_letters, 0)?;
        let mut safe = Vec::new();

        for word in word_set.words() {
            if word.has_any(wrong_letters) {
                continue;
            }
            if word.has_letter(suggestion.letter) {
                return Ok(word);
            }
            safe.push(word);
        }

        loop {
            suggestion = word_set.suggest(wrong_letters, suggestion.next_rank)?;
            if let Some(&word) = safe.iter().find(|w| w.has_letter(suggestion.letter)) {
                return Ok(word);
            }
        }
    }
}

impl GuessingStrategy for Solver {
    fn next_guess(&mut self, game: &HangmanGame) -> Result<Guess, StrategyError> {
        let pattern = game.revealed();
        let word_set = self.index.resolve(pattern)?;

        if let [only] = word_set.words() {
            // The secret is not in the dictionary; repeating the word changes nothing
            if game.wrong_words().contains(only.text()) {
                return Err(StrategyError::ExhaustedSuggestions);
            }
            return Ok(Guess::Word(only.text().to_string()));
        }

        Self::suggest(pattern, word_set, game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, LOST_SCORE, RoundError};
    use crate::solver::WordSetBuilder;

    fn dictionary(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn game(secret: &str, max_wrong: u32) -> HangmanGame {
        HangmanGame::new(Word::new(secret).unwrap(), max_wrong)
    }

    #[test]
    fn first_guess_is_most_frequent_letter() {
        let mut solver = Solver::new(dictionary(&["cat", "car", "bat"]));
        let guess = solver.next_guess(&game("cat", 5)).unwrap();
        assert!(matches!(guess, Guess::Letter('A' | 'C' | 'T')));
        assert_eq!(guess, Guess::Letter('A'));
    }

    #[test]
    fn single_candidate_is_guessed_as_word() {
        let mut solver = Solver::new(dictionary(&["cat", "car", "bat"]));
        let mut game = game("bat", 5);
        game.guess_letter('b').unwrap();
        // Pattern B--: only BAT starts with a B
        assert_eq!(
            solver.next_guess(&game).unwrap(),
            Guess::Word("BAT".to_string())
        );
    }

    #[test]
    fn wrong_single_candidate_is_not_repeated() {
        let mut solver = Solver::new(dictionary(&["cat", "dog"]));
        let mut game = game("cot", 5);
        // A misses, C reveals C--, CAT is guessed and is wrong
        assert_eq!(
            game.run(&mut solver),
            Err(RoundError::Strategy(StrategyError::ExhaustedSuggestions))
        );
        assert!(game.wrong_words().contains("CAT"));
        assert_eq!(game.status(), GameStatus::KeepGuessing);
    }

    #[test]
    fn wrong_letters_do_not_narrow_word_sets() {
        let mut solver = Solver::new(dictionary(&["cat", "car", "bat"]));
        let mut game = game("cat", 5);
        game.guess_letter('b').unwrap();
        game.guess_letter('t').unwrap();
        // --T still holds BAT; the wrong B is excluded from suggestions instead
        assert_eq!(solver.next_guess(&game).unwrap(), Guess::Letter('A'));
    }

    #[test]
    fn single_blank_probes_candidate_words() {
        let mut solver = Solver::new(dictionary(&["cat", "car", "bat"]));
        let mut game = game("cat", 5);
        game.guess_letter('c').unwrap();
        game.guess_letter('a').unwrap();
        assert_eq!(game.revealed().to_string(), "CA-");

        // CA- holds CAR and CAT; R and T tie, R comes first
        assert_eq!(
            solver.next_guess(&game).unwrap(),
            Guess::Word("CAR".to_string())
        );

        game.guess_word("car").unwrap();
        assert_eq!(
            solver.next_guess(&game).unwrap(),
            Guess::Word("CAT".to_string())
        );
    }

    #[test]
    fn single_blank_skips_wrong_letters() {
        let mut solver = Solver::new(dictionary(&["cat", "car", "bat"]));
        let mut game = game("cat", 5);
        game.guess_letter('r').unwrap();
        game.guess_letter('c').unwrap();
        game.guess_letter('a').unwrap();
        assert_eq!(
            solver.next_guess(&game).unwrap(),
            Guess::Word("CAT".to_string())
        );
    }

    #[test]
    fn single_blank_exhaustion_is_an_error() {
        let mut solver = Solver::new(dictionary(&["cat", "car", "bat"]));
        let mut game = game("cab", 5);
        game.guess_letter('c').unwrap();
        game.guess_letter('a').unwrap();
        game.guess_word("car").unwrap();
        game.guess_word("cat").unwrap();
        assert_eq!(
            solver.next_guess(&game),
            Err(StrategyError::ExhaustedSuggestions)
        );
    }

    #[test]
    fn final_blow_guesses_a_safe_word() {
        let mut solver = Solver::new(dictionary(&["mop", "cot", "dog", "hog", "log"]));
        let mut game = game("dog", 1);
        game.guess_letter('z').unwrap();
        assert_eq!(game.wrong_guesses_remaining(), 0);

        // Pattern --- with O most frequent; MOP is the first word holding it
        let guess = solver.next_guess(&game).unwrap();
        assert_eq!(guess, Guess::Word("MOP".to_string()));
    }

    #[test]
    fn final_blow_avoids_wrong_letters() {
        let mut solver = Solver::new(dictionary(&["mop", "cot", "dog", "hog", "log"]));
        let mut game = game("dog", 2);
        game.guess_letter('m').unwrap();
        game.guess_letter('c').unwrap();
        let guess = solver.next_guess(&game).unwrap();
        assert_eq!(guess, Guess::Word("DOG".to_string()));
    }

    #[test]
    fn final_blow_falls_down_the_ranking() {
        // E is most frequent but every word holding it also holds wrong X
        let words = ["exe", "exes", "abcd", "xyz"];
        let set = {
            let mut builder = WordSetBuilder::new();
            for w in dictionary(&words[..]) {
                builder.update(w, LetterSet::EMPTY);
            }
            builder.seal()
        };
        let wrong: LetterSet = b"XY".iter().copied().collect();
        let word = Solver::final_blow(&set, wrong).unwrap();
        assert_eq!(word.text(), "ABCD");
    }

    #[test]
    fn final_blow_without_safe_words_is_exhausted() {
        let set = {
            let mut builder = WordSetBuilder::new();
            for w in dictionary(&["ab", "ba"]) {
                builder.update(w, LetterSet::EMPTY);
            }
            builder.seal()
        };
        let wrong: LetterSet = b"A".iter().copied().collect();
        assert_eq!(
            Solver::final_blow(&set, wrong),
            Err(StrategyError::ExhaustedSuggestions)
        );
    }

    #[test]
    fn unknown_secret_length_is_an_error() {
        let mut solver = Solver::new(dictionary(&["cat"]));
        assert_eq!(
            solver.next_guess(&game("horse", 5)),
            Err(StrategyError::UnknownLength(5))
        );
    }

    #[test]
    fn every_dictionary_word_finishes() {
        let words = [
            "cat", "car", "bat", "cot", "tab", "act", "bar", "tar", "rat", "art", "llama",
            "lemma", "sigma", "gamma", "comma", "dogma", "a", "i", "banana", "bandana",
        ];
        let mut solver = Solver::new(dictionary(&words));

        for secret in words {
            let mut game = game(secret, 5);
            let score = game.run(&mut solver).unwrap();
            assert_ne!(game.status(), GameStatus::KeepGuessing);
            assert!(score <= LOST_SCORE);
            if game.status() == GameStatus::GameWon {
                assert!(score < LOST_SCORE);
            }
        }
    }

    #[test]
    fn cache_persists_across_games() {
        let words = ["cat", "car", "bat", "cot", "tab"];
        let mut solver = Solver::new(dictionary(&words));

        game("cat", 5).run(&mut solver).unwrap();
        let after_first = solver.index().pattern_count();
        assert!(after_first > 1);

        game("cat", 5).run(&mut solver).unwrap();
        assert_eq!(solver.index().pattern_count(), after_first);
    }

    #[test]
    fn generous_budget_always_wins() {
        let words = ["cat", "car", "bat", "cot", "tab", "act", "bar", "tar", "rat", "art"];
        let mut solver = Solver::new(dictionary(&words));
        for secret in words {
            let mut game = game(secret, 26);
            game.run(&mut solver).unwrap();
            assert_eq!(game.status(), GameStatus::GameWon, "secret {secret}");
        }
    }
}
