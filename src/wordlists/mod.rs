//! Dictionary storage for hangman solving
//!
//! A [`Corpus`] holds the loaded word list and a lazily filled index of words
//! by length.

pub mod loader;

pub use loader::CorpusError;

use log::debug;
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Default dictionary location, relative to the working directory
pub const DEFAULT_WORDLIST: &str = "english-words/words_alpha.txt";

/// Immutable, ordered word list with a per-length cache
///
/// Words are never added or removed after construction. Each length bucket is
/// built on first request and shared afterwards.
#[derive(Debug, Default)]
pub struct Corpus {
    words: Vec<String>,
    by_length: RwLock<FxHashMap<usize, Arc<[String]>>>,
}

impl Corpus {
    /// Wrap an ordered list of already-normalized words
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            by_length: RwLock::default(),
        }
    }

    /// Build a corpus from loosely formatted words, normalizing each one
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .collect(),
        )
    }

    /// Load a corpus from a dictionary file
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Unavailable` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        loader::load_from_file(path).map(Self::new)
    }

    /// All words, in load order
    #[must_use]
    pub fn words(&self) -> &[String] {
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

    /// Words with exactly `length` characters, in load order
    ///
    /// The result is cached; later calls for the same length return the same
    /// shared slice.
    ///
    /// # Examples
    /// ```
    /// use hangman_helper::wordlists::Corpus;
    ///
    /// let corpus = Corpus::from_words(["cat", "car", "dog", "do"]);
    /// assert_eq!(&*corpus.words_of_length(2), ["do"]);
    /// assert!(corpus.words_of_length(7).is_empty());
    /// ```
    pub fn words_of_length(&self, length: usize) -> Arc<[String]> {
        if let Some(words) = self
            .by_length
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&length)
        {
            return Arc::clone(words);
        }

        let mut cache = self
            .by_length
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        // Another reader may have filled the bucket between the two locks
        Arc::clone(cache.entry(length).or_insert_with(|| {
            let words: Arc<[String]> = self
                .words
                .iter()
                .filter(|w| w.chars().count() == length)
                .cloned()
                .collect();
            debug!("indexed {} words of length {length}", words.len());
            words
        }))
    }
}
