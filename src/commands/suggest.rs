//! Candidate suggestion command
//!
//! One-shot query: which dictionary words fit a pattern and avoid the given
//! wrong guesses.

use super::CommandError;
use crate::core::Pattern;
use crate::solver::Solver;

/// Configuration for a suggestion query
pub struct SuggestConfig {
    /// Pattern text, `' '` or `'_'` for unknown slots
    pub pattern: String,
    /// Strings that must not occur anywhere in a candidate
    pub exclude: Vec<String>,
    pub limit: usize,
}

/// Result of a suggestion query
pub struct SuggestResult {
    pub pattern: Pattern,
    pub exclude: Vec<String>,
    pub total_candidates: usize,
    pub words: Vec<String>,
}

/// Find the best-scoring candidates for a pattern
///
/// # Errors
///
/// Returns `CommandError::InvalidPattern` if the pattern holds characters
/// other than letters and wildcards.
pub fn suggest_words(config: SuggestConfig, solver: &Solver) -> Result<SuggestResult, CommandError> {
    let pattern: Pattern = config.pattern.parse()?;
    let exclude: Vec<String> = config.exclude.iter().map(|s| s.to_lowercase()).collect();

    let candidates = solver.find_possible_words(&pattern, &exclude)?;
    let total_candidates = candidates.len();

    Ok(SuggestResult {
        pattern,
        exclude,
        total_candidates,
        words: candidates.into_iter().take(config.limit).collect(),
    })
}
