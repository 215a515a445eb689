//! Guess order command
//!
//! Shows which letters the automatic player would try, and in what order, for
//! a target of a given length.

use crate::core::LetterRanking;
use crate::solver::Solver;

/// Result of computing a guess order
pub struct OrderResult {
    pub length: usize,
    /// Dictionary words with exactly `length` letters
    pub word_count: usize,
    /// True when no word had that length and the whole corpus was ranked
    pub used_global: bool,
    pub ranking: LetterRanking,
}

/// Compute the guess order for targets of `length` letters
#[must_use]
pub fn guess_order(length: usize, solver: &Solver) -> OrderResult {
    let word_count = solver.words_of_length(length).len();

    OrderResult {
        length,
        word_count,
        used_global: word_count == 0,
        ranking: solver.next_guess_order(length),
    }
}
