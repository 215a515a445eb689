//! Word list loading utilities
//!
//! Reads a dictionary with one word per line. Entries are trimmed and
//! lowercased but otherwise passed through untouched.

use log::debug;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for a dictionary that cannot be loaded
#[derive(Debug)]
pub enum CorpusError {
    /// The backing file is missing or unreadable
    Unavailable { path: PathBuf, source: io::Error },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { path, source } => {
                write!(f, "Word list {} is unavailable: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } => Some(source),
        }
    }
}

/// Load words from a file
///
/// Every line becomes one entry, blank lines included (as empty words).
///
/// # Errors
///
/// Returns `CorpusError::Unavailable` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use hangman_helper::wordlists::loader::load_from_file;
///
/// let words = load_from_file("english-words/words_alpha.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(&content);
    debug!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Split text into normalized words, one per line
///
/// # Examples
/// ```
/// use hangman_helper::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines("Cat\n  dog \r\n");
/// assert_eq!(words, vec!["cat", "dog"]);
/// ```
#[must_use]
pub fn words_from_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim().to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_lines_normalizes() {
        let words = words_from_lines("CAT\n\tcar\ncan  \n");
        assert_eq!(words, vec!["cat", "car", "can"]);
    }

    #[test]
    fn words_from_lines_keeps_blank_and_odd_entries() {
        let words = words_from_lines("cat\n\ne-mail\n");
        assert_eq!(words, vec!["cat", "", "e-mail"]);
    }

    #[test]
    fn words_from_lines_empty() {
        assert!(words_from_lines("").is_empty());
    }

    #[test]
    fn load_from_file_reads_every_line() {
        let path = std::env::temp_dir().join(format!(
            "hangman_helper_loader_{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "Dog\ndo\ncat").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["dog", "do", "cat"]);
    }

    #[test]
    fn load_from_missing_file_is_unavailable() {
        let err = load_from_file("does/not/exist/words.txt").unwrap_err();
        assert!(matches!(err, CorpusError::Unavailable { .. }));
        assert!(err.to_string().contains("does/not/exist/words.txt"));
    }
}
