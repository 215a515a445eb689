//! Automatic play command
//!
//! Guesses letters for a known target word in frequency order and records
//! what the solver would suggest after every guess.

use super::CommandError;
use crate::core::{Game, GuessOutcome, Word};
use crate::solver::Solver;
use log::debug;
use std::io::{self, Write};

/// Default number of candidate words shown per turn
pub const DEFAULT_SUGGESTIONS: usize = 10;

/// Configuration for playing a word
pub struct PlayConfig {
    pub target: String,
    /// Candidate words kept per turn
    pub suggestions: usize,
    /// Stop after this many incorrect guesses; `None` plays until the guess
    /// order runs out
    pub max_misses: Option<usize>,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            suggestions: DEFAULT_SUGGESTIONS,
            max_misses: None,
        }
    }
}

/// Snapshot of the game after one guess (or before the first)
#[derive(Debug, Clone)]
pub struct TurnStep {
    pub guess: Option<(char, GuessOutcome)>,
    pub masked: String,
    pub turns: usize,
    pub incorrect: Vec<char>,
    pub candidate_count: usize,
    pub suggestions: Vec<String>,
}

/// Result of playing a word
#[derive(Debug)]
pub struct PlayResult {
    pub target: String,
    pub won: bool,
    pub steps: Vec<TurnStep>,
    pub turns: usize,
    pub guesses: usize,
}

/// Play `config.target` to completion
///
/// The first step describes the untouched board; every later step follows one
/// letter guess.
///
/// # Errors
///
/// Returns `CommandError::InvalidWord` if the target holds anything but
/// letters, or `CommandError::Score` if candidate scoring breaks.
pub fn play_word(config: &PlayConfig, solver: &Solver) -> Result<PlayResult, CommandError> {
    let target = Word::new(&config.target)?;
    let order = solver.next_guess_order(target.len());
    debug!(
        "guess order for {} letters: {}",
        target.len(),
        order.letters().collect::<String>()
    );

    let mut game = Game::new(target);
    let mut steps = vec![snapshot(&game, None, config, solver)?];

    for letter in order.letters() {
        if game.is_won() || missed_out(&game, config.max_misses) {
            break;
        }

        let outcome = game.guess(letter);
        steps.push(snapshot(&game, Some((letter, outcome)), config, solver)?);
    }

    Ok(PlayResult {
        target: game.target().text().to_string(),
        won: game.is_won(),
        steps,
        turns: game.turns(),
        guesses: game.guesses(),
    })
}

/// Play `target` without recording candidates, returning the final state
#[must_use]
pub fn simulate(target: Word, solver: &Solver, max_misses: Option<usize>) -> Game {
    let order = solver.next_guess_order(target.len());
    let mut game = Game::new(target);

    for letter in order.letters() {
        if game.is_won() || missed_out(&game, max_misses) {
            break;
        }
        game.guess(letter);
    }

    game
}

fn missed_out(game: &Game, max_misses: Option<usize>) -> bool {
    max_misses.is_some_and(|max| game.turns() >= max)
}

fn snapshot(
    game: &Game,
    guess: Option<(char, GuessOutcome)>,
    config: &PlayConfig,
    solver: &Solver,
) -> Result<TurnStep, CommandError> {
    let candidates = solver.find_possible_words(&game.pattern(), &game.forbidden())?;

    Ok(TurnStep {
        guess,
        masked: game.masked(),
        turns: game.turns(),
        incorrect: game.incorrect().to_vec(),
        candidate_count: candidates.len(),
        suggestions: candidates.into_iter().take(config.suggestions).collect(),
    })
}

/// Resolve the target word, prompting on stdin when none was given
///
/// # Errors
///
/// Returns `CommandError::InvalidWord` for anything but letters, or
/// `CommandError::Io` if the prompt fails.
pub fn read_target(word: Option<String>) -> Result<Word, CommandError> {
    let text = match word {
        Some(word) => word,
        None => prompt_target()?,
    };
    Ok(Word::new(text)?)
}

/// Ask for the target word on stdin
///
/// # Errors
///
/// Returns `CommandError::Io` if stdin or stdout fail.
pub fn prompt_target() -> Result<String, CommandError> {
    print!("Enter a word: ");
    io::stdout()
        .flush()
        .map_err(|e| CommandError::Io(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CommandError::Io(e.to_string()))?;

    Ok(input.trim().to_string())
}
