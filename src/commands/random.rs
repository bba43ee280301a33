//! Random word command
//!
//! Prints distinct dictionary words, one per line, for feeding the play
//! command.

use crate::core::Word;
use crate::wordlists::random_words;
use anyhow::Result;
use rand::Rng;
use std::io::Write;

/// Write `count` distinct random dictionary words to `out`
///
/// # Errors
/// `count` outside `1..=dictionary.len()`, or a write failure.
pub fn run_random<R, W>(dictionary: &[Word], count: usize, rng: &mut R, out: &mut W) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    for word in random_words(dictionary, count, rng)? {
        writeln!(out, "{word}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{loader::contains, parse_dictionary};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn prints_one_word_per_line() {
        let dictionary = parse_dictionary("cat car bat cot tab");
        let mut out = Vec::new();
        run_random(&dictionary, 3, &mut StdRng::seed_from_u64(9), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|w| contains(&dictionary, w)));
    }

    #[test]
    fn rejects_too_many_words() {
        let dictionary = parse_dictionary("cat car");
        let mut out = Vec::new();
        let err = run_random(&dictionary, 3, &mut StdRng::seed_from_u64(9), &mut out).unwrap_err();
        assert_eq!(err.to_string(), "Number of words must be between 1 and 2 (got 3)");
        assert!(out.is_empty());
    }
}
