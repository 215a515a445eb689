//! Command implementations

pub mod benchmark;
pub mod order;
pub mod play;
pub mod suggest;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use order::{OrderResult, guess_order};
pub use play::{
    PlayConfig, PlayResult, TurnStep, play_word, prompt_target, read_target, simulate,
};
pub use suggest::{SuggestConfig, SuggestResult, suggest_words};

use crate::core::{PatternError, ScoreError, WordError};
use std::fmt;

/// Error type shared by the command implementations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The target word was rejected; the session should end
    InvalidWord(WordError),
    InvalidPattern(PatternError),
    Score(ScoreError),
    Io(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "{e}"),
            Self::InvalidPattern(e) => write!(f, "{e}"),
            Self::Score(e) => write!(f, "Internal scoring error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<WordError> for CommandError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

impl From<PatternError> for CommandError {
    fn from(e: PatternError) -> Self {
        Self::InvalidPattern(e)
    }
}

impl From<ScoreError> for CommandError {
    fn from(e: ScoreError) -> Self {
        Self::Score(e)
    }
}
