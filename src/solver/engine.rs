//! Main hangman solver interface

use crate::core::{LetterRanking, Pattern, ScoreError, ScoreMap};
use crate::wordlists::{Corpus, CorpusError};
use log::debug;
use rayon::prelude::*;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Main hangman solver
///
/// Owns the corpus together with everything derived from it. Derived values
/// are computed on first use and reused for the solver's lifetime.
#[derive(Debug)]
pub struct Solver {
    corpus: Corpus,
    global_ranking: OnceLock<LetterRanking>,
    global_scores: OnceLock<ScoreMap>,
}

impl Solver {
    /// Create a solver over an already loaded corpus
    #[must_use]
    pub fn new(corpus: Corpus) -> Self {
        Self {
            corpus,
            global_ranking: OnceLock::new(),
            global_scores: OnceLock::new(),
        }
    }

    /// Load the corpus from a dictionary file and wrap it in a solver
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Unavailable` if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        Corpus::load(path).map(Self::new)
    }

    #[must_use]
    pub const fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Corpus words of exactly `length` characters
    pub fn words_of_length(&self, length: usize) -> Arc<[String]> {
        self.corpus.words_of_length(length)
    }

    /// Letter ranking over the whole corpus
    pub fn global_ranking(&self) -> &LetterRanking {
        self.global_ranking.get_or_init(|| {
            let ranking = LetterRanking::of(self.corpus.words());
            debug!("global ranking covers {} letters", ranking.len());
            ranking
        })
    }

    /// Score map derived from [`Solver::global_ranking`]
    pub fn global_scores(&self) -> &ScoreMap {
        self.global_scores
            .get_or_init(|| ScoreMap::from_ranking(self.global_ranking()))
    }

    /// Letters to guess, in order, for a target of `length` letters
    ///
    /// Ranks the letters of same-length words, or the whole corpus when no
    /// word has that length.
    ///
    /// # Examples
    /// ```
    /// use hangman_helper::solver::Solver;
    /// use hangman_helper::wordlists::Corpus;
    ///
    /// let solver = Solver::new(Corpus::from_words(["cat", "car", "can", "dog", "do"]));
    /// let order: Vec<char> = solver.next_guess_order(2).letters().collect();
    /// assert_eq!(order, vec!['d', 'o']);
    /// ```
    pub fn next_guess_order(&self, length: usize) -> LetterRanking {
        let words = self.words_of_length(length);
        if words.is_empty() {
            self.global_ranking().clone()
        } else {
            LetterRanking::of(words.iter())
        }
    }

    /// Corpus words consistent with `pattern` that contain none of `forbidden`
    ///
    /// Results are ordered by global word score, highest first. Words with
    /// equal scores keep their corpus order.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::UnknownLetter` if a candidate holds a letter the
    /// global score map lacks. Candidates come from the corpus the map was
    /// built from, so this indicates a broken invariant.
    ///
    /// # Examples
    /// ```
    /// use hangman_helper::core::Pattern;
    /// use hangman_helper::solver::Solver;
    /// use hangman_helper::wordlists::Corpus;
    ///
    /// let solver = Solver::new(Corpus::from_words(["cat", "car", "can", "dog", "do"]));
    /// let pattern: Pattern = "c  ".parse().unwrap();
    ///
    /// let words = solver.find_possible_words(&pattern, &["t"]).unwrap();
    /// assert_eq!(words, vec!["car", "can"]);
    /// ```
    pub fn find_possible_words<S>(
        &self,
        pattern: &Pattern,
        forbidden: &[S],
    ) -> Result<Vec<String>, ScoreError>
    where
        S: AsRef<str> + Sync,
    {
        let scores = self.global_scores();
        let candidates = self.words_of_length(pattern.len());

        let mut scored = candidates
            .par_iter()
            .filter(|word| {
                forbidden.iter().all(|s| !word.contains(s.as_ref())) && pattern.matches(word)
            })
            .map(|word| scores.word_score(word).map(|score| (score, word)))
            .collect::<Result<Vec<_>, _>>()?;

        // Stable: equal scores stay in corpus order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored.into_iter().map(|(_, word)| word.clone()).collect())
    }
}
