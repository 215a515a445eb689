//! Partial-knowledge pattern for a hangman word
//!
//! A pattern has one slot per letter of the secret word. A slot is either a
//! fixed letter (already revealed) or a wildcard (still hidden).
//!
//! Textual form uses one character per slot, with `' '` or `'_'` as wildcard:
//! `"c__"` and `"c  "` both describe a three-letter word starting with `c`.

use std::fmt;
use std::str::FromStr;

/// Wildcard characters accepted when parsing a pattern
pub const WILDCARDS: [char; 2] = [' ', '_'];

/// Knowledge about the secret word, slot by slot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Option<char>>,
}

/// Error type for unparsable patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidSlot { position: usize, found: char },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSlot { position, found } => write!(
                f,
                "Pattern slot {position} is '{found}'; use a letter or one of ' ' / '_'"
            ),
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Build a pattern directly from slots
    #[must_use]
    pub const fn from_slots(slots: Vec<Option<char>>) -> Self {
        Self { slots }
    }

    /// A pattern of `len` wildcards
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Number of slots (the target word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// Count the fixed (revealed) slots
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check whether `word` agrees with every fixed slot
    ///
    /// Words of a different length never match.
    ///
    /// # Examples
    /// ```
    /// use hangman_helper::core::Pattern;
    ///
    /// let pattern: Pattern = "c_t".parse().unwrap();
    /// assert!(pattern.matches("cat"));
    /// assert!(pattern.matches("cut"));
    /// assert!(!pattern.matches("car"));
    /// assert!(!pattern.matches("cart"));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let mut chars = word.chars();
        for slot in &self.slots {
            match (chars.next(), slot) {
                (None, _) => return false,
                (Some(ch), Some(fixed)) if ch != *fixed => return false,
                _ => {}
            }
        }
        chars.next().is_none()
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parse a pattern such as `"c__"` or `"c  "`
    ///
    /// Fixed slots are lowercased; anything that is neither an ASCII letter nor
    /// a wildcard is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slots = s
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                if WILDCARDS.contains(&ch) {
                    Ok(None)
                } else if ch.is_ascii_alphabetic() {
                    Ok(Some(ch.to_ascii_lowercase()))
                } else {
                    Err(PatternError::InvalidSlot {
                        position,
                        found: ch,
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { slots })
    }
}

impl fmt::Display for Pattern {
    /// Writes `_` for every hidden slot
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or('_'))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_spaces_and_underscores() {
        let spaced: Pattern = "c  ".parse().unwrap();
        let underscored: Pattern = "c__".parse().unwrap();
        assert_eq!(spaced, underscored);
        assert_eq!(spaced.slots(), &[Some('c'), None, None]);
    }

    #[test]
    fn parse_lowercases_fixed_slots() {
        let pattern: Pattern = "C_T".parse().unwrap();
        assert_eq!(pattern.slots(), &[Some('c'), None, Some('t')]);
    }

    #[test]
    fn parse_rejects_digits() {
        let err = "c4t".parse::<Pattern>().unwrap_err();
        assert_eq!(
            err,
            PatternError::InvalidSlot {
                position: 1,
                found: '4'
            }
        );
    }

    #[test]
    fn parse_empty() {
        let pattern: Pattern = "".parse().unwrap();
        assert!(pattern.is_empty());
        assert!(pattern.matches(""));
        assert!(!pattern.matches("a"));
    }

    #[test]
    fn blank_matches_any_word_of_same_length() {
        let pattern = Pattern::blank(3);
        assert_eq!(pattern.fixed_count(), 0);
        assert!(pattern.matches("cat"));
        assert!(pattern.matches("dog"));
        assert!(!pattern.matches("do"));
    }

    #[test]
    fn matches_checks_every_fixed_slot() {
        let pattern = Pattern::from_slots(vec![None, Some('a'), None, Some('a')]);
        assert_eq!(pattern.fixed_count(), 2);
        assert!(pattern.matches("java"));
        assert!(pattern.matches("lava"));
        assert!(!pattern.matches("jive"));
        assert!(!pattern.matches("lav"));
    }

    #[test]
    fn display_uses_underscores() {
        let pattern: Pattern = "c t".parse().unwrap();
        assert_eq!(pattern.to_string(), "c_t");
    }
}
