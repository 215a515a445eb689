//! Core domain types for hangman
//!
//! This module contains the fundamental domain types. Everything here is pure
//! and works on in-memory data only.

mod frequency;
mod game;
mod pattern;
mod word;

pub use frequency::{LetterRanking, ScoreError, ScoreMap};
pub use game::{Game, GuessOutcome};
pub use pattern::{Pattern, PatternError, WILDCARDS};
pub use word::{Word, WordError};
