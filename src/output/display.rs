//! Display functions for command results

use super::formatters::{create_progress_bar, describe_guess, join_letters, suggestion_list};
use crate::commands::{BenchmarkResult, OrderResult, PlayResult, SuggestResult, TurnStep};
use colored::Colorize;

/// Print one board state: masked word, turns, wrong guesses, candidates
pub fn print_turn(step: &TurnStep) {
    if let Some((letter, outcome)) = step.guess {
        println!("\nGuess: {}", describe_guess(letter, outcome).bright_white());
    }

    println!();
    println!("{}", step.masked.bright_yellow().bold());
    println!("{} turns taken", step.turns);
    println!(
        "Incorrect Guesses: {}",
        join_letters(&step.incorrect).red()
    );
    println!("Similar Words: {}", suggestion_list(step));
    println!("\n---");
}

/// Print every step of a played word and the final verdict
pub fn print_play_result(result: &PlayResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Playing: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        print_turn(step);
    }

    println!();
    if result.won {
        println!("{}", "WIN".green().bold());
        println!(
            "Solved with {} {} and {} incorrect",
            result.guesses,
            if result.guesses == 1 { "guess" } else { "guesses" },
            result.turns
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Gave up after {} guesses ({} incorrect)",
                result.guesses, result.turns
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of a suggestion query
pub fn print_suggest_result(result: &SuggestResult) {
    println!(
        "\nPattern: {}  ({} of {} letters known)",
        result.pattern.to_string().bright_yellow().bold(),
        result.pattern.fixed_count(),
        result.pattern.len()
    );
    if !result.exclude.is_empty() {
        println!("Excluding: {}", result.exclude.join(", ").red());
    }
    println!("Candidates: {}", result.total_candidates);

    if result.words.is_empty() {
        println!("\n{}", "No matching words.".bright_black());
        return;
    }

    println!();
    for (i, word) in result.words.iter().enumerate() {
        println!(
            "  {:>3}. {}",
            (i + 1).to_string().bright_black(),
            word.to_uppercase().bright_white()
        );
    }
}

/// Print the guess order for a word length
pub fn print_order_result(result: &OrderResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ORDER:".bright_cyan().bold(),
        format!("{} letters", result.length).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.used_global {
        println!(
            "\n{}",
            "No words of this length; using the whole dictionary.".yellow()
        );
    } else {
        println!("\n📊 Ranked over {} words", result.word_count);
    }

    let max = result.ranking.entries().first().map_or(0, |&(_, count)| count);
    println!();
    for (i, &(letter, count)) in result.ranking.entries().iter().enumerate() {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!(
            "  {:>2}. {} [{}] {}",
            i + 1,
            letter.to_ascii_uppercase().to_string().bright_white().bold(),
            bar.green(),
            count
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words played:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average misses:   {}",
        format!("{:.2}", result.average_misses).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_misses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_misses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Incorrect guesses:".bright_cyan().bold());
    for (&misses, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {misses:>2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
