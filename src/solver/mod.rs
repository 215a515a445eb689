//! Hangman solving
//!
//! Candidate filtering, scoring and guess ordering over a loaded corpus.

mod engine;

pub use engine::Solver;
