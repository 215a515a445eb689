//! Letter frequency ranking and word scoring
//!
//! A [`LetterRanking`] orders the distinct letters of a word collection by how
//! often they occur. A [`ScoreMap`] turns a ranking into integer weights so
//! that words built from common letters score higher than words built from
//! rare ones.

use rustc_hash::FxHashMap;
use std::fmt;

/// Distinct letters of a word collection, most frequent first
///
/// Letters with equal counts keep the order in which they first appear in the
/// concatenated input, so the ranking is reproducible for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterRanking {
    entries: Vec<(char, usize)>,
}

impl LetterRanking {
    /// Rank the letters of `words` by total occurrence count
    ///
    /// # Examples
    /// ```
    /// use hangman_helper::core::LetterRanking;
    ///
    /// let ranking = LetterRanking::of(["cat", "car", "can"]);
    /// let letters: Vec<char> = ranking.letters().collect();
    /// assert_eq!(letters, vec!['c', 'a', 't', 'r', 'n']);
    /// ```
    #[must_use]
    pub fn of<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Slot index per letter; `entries` stays in first-seen order until sorted
        let mut slots: FxHashMap<char, usize> = FxHashMap::default();
        let mut entries: Vec<(char, usize)> = Vec::new();

        for word in words {
            for ch in word.as_ref().chars() {
                let slot = *slots.entry(ch).or_insert_with(|| {
                    entries.push((ch, 0));
                    entries.len() - 1
                });
                entries[slot].1 += 1;
            }
        }

        // Stable: ties keep first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        Self { entries }
    }

    /// Letters in ranking order
    pub fn letters(&self) -> impl DoubleEndedIterator<Item = char> + ExactSizeIterator + '_ {
        self.entries.iter().map(|&(ch, _)| ch)
    }

    /// `(letter, count)` pairs in ranking order
    #[must_use]
    pub fn entries(&self) -> &[(char, usize)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Error type for scoring a word against a score map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// The word holds a letter the score map's source collection never had
    UnknownLetter(char),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLetter(ch) => write!(f, "Letter '{ch}' has no weight in the score map"),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Rank-based letter weights
///
/// The rarest letter of the ranking weighs 1 and the most common weighs N,
/// where N is the number of distinct letters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreMap {
    weights: FxHashMap<char, u64>,
}

impl ScoreMap {
    /// Derive weights from a ranking
    #[must_use]
    pub fn from_ranking(ranking: &LetterRanking) -> Self {
        let weights = ranking
            .letters()
            .rev()
            .zip(1..)
            .collect::<FxHashMap<char, u64>>();

        Self { weights }
    }

    /// Weight of a single letter
    #[must_use]
    pub fn weight(&self, letter: char) -> Option<u64> {
        self.weights.get(&letter).copied()
    }

    /// Sum of letter weights over every character of `word`
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::UnknownLetter` for the first character of `word`
    /// that has no weight.
    ///
    /// # Examples
    /// ```
    /// use hangman_helper::core::{LetterRanking, ScoreMap};
    ///
    /// let scores = ScoreMap::from_ranking(&LetterRanking::of(["cat", "car", "can"]));
    /// assert_eq!(scores.word_score("cat"), Ok(12));
    /// assert!(scores.word_score("dog").is_err());
    /// ```
    pub fn word_score(&self, word: &str) -> Result<u64, ScoreError> {
        word.chars()
            .map(|ch| self.weight(ch).ok_or(ScoreError::UnknownLetter(ch)))
            .sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_orders_by_count_descending() {
        let ranking = LetterRanking::of(["banana", "band"]);
        // a:4 n:3 b:2 d:1
        assert_eq!(ranking.entries(), &[('a', 4), ('n', 3), ('b', 2), ('d', 1)]);
    }

    #[test]
    fn ranking_ties_keep_first_seen_order() {
        let ranking = LetterRanking::of(["cat", "car", "can"]);
        assert_eq!(
            ranking.entries(),
            &[('c', 3), ('a', 3), ('t', 1), ('r', 1), ('n', 1)]
        );
    }

    #[test]
    fn ranking_is_reproducible() {
        let words = ["stone", "notes", "onset", "tones"];
        assert_eq!(LetterRanking::of(words), LetterRanking::of(words));
    }

    #[test]
    fn ranking_omits_absent_letters() {
        let ranking = LetterRanking::of(["aaa"]);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking.entries(), &[('a', 3)]);
    }

    #[test]
    fn ranking_of_nothing_is_empty() {
        let ranking = LetterRanking::of(Vec::<String>::new());
        assert!(ranking.is_empty());
        assert!(ScoreMap::from_ranking(&ranking).is_empty());
    }

    #[test]
    fn score_map_weights_reverse_rank() {
        let ranking = LetterRanking::of(["cat", "car", "can"]);
        let scores = ScoreMap::from_ranking(&ranking);

        assert_eq!(scores.len(), 5);
        assert_eq!(scores.weight('c'), Some(5));
        assert_eq!(scores.weight('a'), Some(4));
        assert_eq!(scores.weight('t'), Some(3));
        assert_eq!(scores.weight('r'), Some(2));
        assert_eq!(scores.weight('n'), Some(1));
        assert_eq!(scores.weight('z'), None);
    }

    #[test]
    fn word_score_sums_weights() {
        let scores = ScoreMap::from_ranking(&LetterRanking::of(["cat", "car", "can"]));
        assert_eq!(scores.word_score("cat"), Ok(12));
        assert_eq!(scores.word_score("car"), Ok(11));
        assert_eq!(scores.word_score("can"), Ok(10));
        assert_eq!(scores.word_score(""), Ok(0));
    }

    #[test]
    fn word_score_unknown_letter() {
        let scores = ScoreMap::from_ranking(&LetterRanking::of(["cat"]));
        assert_eq!(scores.word_score("cut"), Err(ScoreError::UnknownLetter('u')));
    }

    #[test]
    fn word_score_increases_with_heavier_letter() {
        let ranking = LetterRanking::of(["eeeee", "tttt", "aaa", "oo", "i"]);
        let scores = ScoreMap::from_ranking(&ranking);
        let letters: Vec<char> = ranking.letters().collect();

        // Swapping any letter for a heavier one strictly raises the score
        for (i, &lighter) in letters.iter().enumerate().skip(1) {
            for &heavier in &letters[..i] {
                let base = format!("i{lighter}i");
                let swapped = base.replacen(lighter, &heavier.to_string(), 1);
                assert!(
                    scores.word_score(&swapped).unwrap() > scores.word_score(&base).unwrap(),
                    "{swapped} should outscore {base}"
                );
            }
        }
    }
}
