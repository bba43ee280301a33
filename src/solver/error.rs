use std::fmt;

/// Error type for broken strategy invariants
///
/// None of these are recoverable: the engine is deterministic, so a retry
/// would fail the same way. They indicate a dictionary that contradicts the
/// game (for example a secret word that is not in it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// No letter is left to suggest for the current word set
    ExhaustedSuggestions,
    /// No ancestor word set exists to derive a pattern from
    MissingParentPattern { pattern: String },
    /// The dictionary holds no words of this length
    UnknownLength(usize),
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExhaustedSuggestions => write!(f, "No letter left to suggest"),
            Self::MissingParentPattern { pattern } => {
                write!(f, "No parent pattern found for '{pattern}'")
            }
            Self::UnknownLength(len) => write!(f, "Dictionary has no words of length {len}"),
        }
    }
}

impl std::error::Error for StrategyError {}
