//! Hangman Helper
//!
//! A hangman assistant: filters a dictionary down to the words that fit what
//! is known about the secret word and suggests letters in frequency order.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_helper::core::Pattern;
//! use hangman_helper::solver::Solver;
//! use hangman_helper::wordlists::Corpus;
//!
//! let solver = Solver::new(Corpus::from_words(["cat", "car", "can", "dog", "do"]));
//!
//! // Three letters, first one is 'c', no 't' anywhere
//! let pattern: Pattern = "c__".parse().unwrap();
//! let words = solver.find_possible_words(&pattern, &["t"]).unwrap();
//! assert_eq!(words, vec!["car", "can"]);
//!
//! // Letters to try for a three-letter word
//! let order: String = solver.next_guess_order(3).letters().collect();
//! assert!(order.starts_with("ca"));
//! ```

// Core domain types
pub mod core;

// Filtering and scoring
pub mod solver;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
