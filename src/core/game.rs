//! Hangman game state
//!
//! Tracks what is known about the target while letters are guessed. The
//! solver never owns this state; it only reads the pattern and the incorrect
//! letters derived from it.

use super::{Pattern, Word};
use rustc_hash::FxHashSet;

/// What a single letter guess did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word; carries the number of slots it revealed
    Hit(usize),
    /// The letter is not in the word
    Miss,
    /// The letter was guessed before; nothing changed
    Repeated,
}

/// State of one hangman round
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    revealed: FxHashSet<char>,
    incorrect: Vec<char>,
    turns: usize,
    guesses: usize,
}

impl Game {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            revealed: FxHashSet::default(),
            incorrect: Vec::new(),
            turns: 0,
            guesses: 0,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Apply a letter guess
    ///
    /// # Examples
    /// ```
    /// use hangman_helper::core::{Game, GuessOutcome, Word};
    ///
    /// let mut game = Game::new(Word::new("moon").unwrap());
    /// assert_eq!(game.guess('o'), GuessOutcome::Hit(2));
    /// assert_eq!(game.guess('e'), GuessOutcome::Miss);
    /// assert_eq!(game.masked(), "_ O O _");
    /// ```
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_ascii_lowercase();

        if self.revealed.contains(&letter) || self.incorrect.contains(&letter) {
            return GuessOutcome::Repeated;
        }

        self.guesses += 1;

        if self.target.has_letter(letter) {
            self.revealed.insert(letter);
            GuessOutcome::Hit(self.target.positions_of(letter).len())
        } else {
            self.incorrect.push(letter);
            self.turns += 1;
            GuessOutcome::Miss
        }
    }

    /// Pattern of the target with unrevealed slots as wildcards
    #[must_use]
    pub fn pattern(&self) -> Pattern {
        Pattern::from_slots(
            self.target
                .text()
                .chars()
                .map(|ch| self.revealed.contains(&ch).then_some(ch))
                .collect(),
        )
    }

    /// Target with revealed letters upper-cased and hidden ones as `_`,
    /// separated by spaces
    #[must_use]
    pub fn masked(&self) -> String {
        self.target
            .text()
            .chars()
            .map(|ch| {
                if self.revealed.contains(&ch) {
                    ch.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Incorrect guesses, in the order they were made
    #[must_use]
    pub fn incorrect(&self) -> &[char] {
        &self.incorrect
    }

    /// Incorrect guesses as forbidden substrings for candidate filtering
    #[must_use]
    pub fn forbidden(&self) -> Vec<String> {
        self.incorrect.iter().map(char::to_string).collect()
    }

    /// Number of incorrect guesses so far
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    /// True once every letter of the target is revealed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.target
            .distinct_letters()
            .all(|ch| self.revealed.contains(&ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str) -> Game {
        Game::new(Word::new(word).unwrap())
    }

    #[test]
    fn new_game_is_fully_hidden() {
        let g = game("cat");
        assert_eq!(g.masked(), "_ _ _");
        assert_eq!(g.pattern(), Pattern::blank(3));
        assert_eq!(g.turns(), 0);
        assert!(!g.is_won());
    }

    #[test]
    fn hit_reveals_every_position() {
        let mut g = game("banana");
        assert_eq!(g.guess('a'), GuessOutcome::Hit(3));
        assert_eq!(g.masked(), "_ A _ A _ A");
        assert_eq!(g.pattern().to_string(), "_a_a_a");
        assert_eq!(g.turns(), 0);
    }

    #[test]
    fn miss_counts_a_turn() {
        let mut g = game("cat");
        assert_eq!(g.guess('e'), GuessOutcome::Miss);
        assert_eq!(g.guess('o'), GuessOutcome::Miss);
        assert_eq!(g.turns(), 2);
        assert_eq!(g.incorrect(), &['e', 'o']);
        assert_eq!(g.forbidden(), vec!["e".to_string(), "o".to_string()]);
    }

    #[test]
    fn repeated_guess_changes_nothing() {
        let mut g = game("cat");
        g.guess('e');
        g.guess('c');
        assert_eq!(g.guess('e'), GuessOutcome::Repeated);
        assert_eq!(g.guess('C'), GuessOutcome::Repeated);
        assert_eq!(g.turns(), 1);
        assert_eq!(g.guesses(), 2);
    }

    #[test]
    fn won_when_all_letters_revealed() {
        let mut g = game("noon");
        g.guess('n');
        assert!(!g.is_won());
        g.guess('o');
        assert!(g.is_won());
        assert_eq!(g.masked(), "N O O N");
    }
}
