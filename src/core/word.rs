//! Secret word representation
//!
//! A `Word` is the hangman target: a non-empty run of ASCII letters with a
//! letter position index used to reveal slots after a correct guess.

use rustc_hash::FxHashMap;
use std::fmt;

/// A validated hangman target word
///
/// Stores the lowercase text and the positions of every letter it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for rejected target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters(String),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "The word must contain at least one letter."),
            Self::InvalidCharacters(_) => write!(
                f,
                "The word can only contain letters (no numbers or special characters)."
            ),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from user input
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed input is empty
    /// - Any character falls outside `a-z`
    ///
    /// # Examples
    /// ```
    /// use hangman_helper::core::Word;
    ///
    /// let word = Word::new("  Cat\n").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(Word::new("c4t").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.chars().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Iterate over the distinct letters of the word, in no particular order
    pub fn distinct_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.char_positions.keys().copied()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
