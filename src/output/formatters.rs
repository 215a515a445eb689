//! Formatting utilities for terminal output

use crate::commands::TurnStep;
use crate::core::GuessOutcome;

/// Join letters with `", "`, as shown in the incorrect-guesses line
#[must_use]
pub fn join_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Candidate list with a `(+N more)` tail when it was truncated
#[must_use]
pub fn suggestion_list(step: &TurnStep) -> String {
    let shown = step.suggestions.join(", ");
    let hidden = step.candidate_count.saturating_sub(step.suggestions.len());

    match (shown.is_empty(), hidden) {
        (true, _) => "(none)".to_string(),
        (false, 0) => shown,
        (false, more) => format!("{shown} (+{more} more)"),
    }
}

/// Short description of one guess
#[must_use]
pub fn describe_guess(letter: char, outcome: GuessOutcome) -> String {
    let letter = letter.to_ascii_uppercase();
    match outcome {
        GuessOutcome::Hit(1) => format!("'{letter}' is in the word (1 position)"),
        GuessOutcome::Hit(n) => format!("'{letter}' is in the word ({n} positions)"),
        GuessOutcome::Miss => format!("'{letter}' is not in the word"),
        GuessOutcome::Repeated => format!("'{letter}' was already guessed"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(suggestions: &[&str], candidate_count: usize) -> TurnStep {
        TurnStep {
            guess: None,
            masked: String::new(),
            turns: 0,
            incorrect: Vec::new(),
            candidate_count,
            suggestions: suggestions.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn join_letters_formats() {
        assert_eq!(join_letters(&['e', 'o', 's']), "e, o, s");
        assert_eq!(join_letters(&[]), "");
    }

    #[test]
    fn suggestion_list_complete() {
        assert_eq!(suggestion_list(&step(&["cat", "car"], 2)), "cat, car");
    }

    #[test]
    fn suggestion_list_truncated() {
        assert_eq!(
            suggestion_list(&step(&["cat", "car"], 5)),
            "cat, car (+3 more)"
        );
    }

    #[test]
    fn suggestion_list_empty() {
        assert_eq!(suggestion_list(&step(&[], 0)), "(none)");
    }

    #[test]
    fn describe_guess_variants() {
        assert_eq!(
            describe_guess('a', GuessOutcome::Hit(3)),
            "'A' is in the word (3 positions)"
        );
        assert_eq!(
            describe_guess('c', GuessOutcome::Hit(1)),
            "'C' is in the word (1 position)"
        );
        assert_eq!(describe_guess('z', GuessOutcome::Miss), "'Z' is not in the word");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
