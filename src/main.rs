//! Hangman Helper - CLI
//!
//! Plays hangman against a known word, or answers one-off candidate queries,
//! using letter-frequency heuristics over a dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use hangman_helper::{
    commands::{
        BenchmarkConfig, CommandError, PlayConfig, SuggestConfig, guess_order, play_word,
        read_target, run_benchmark, suggest_words,
        benchmark::sample_targets,
        play::DEFAULT_SUGGESTIONS,
    },
    output::{print_benchmark_result, print_order_result, print_play_result, print_suggest_result},
    solver::Solver,
    wordlists::DEFAULT_WORDLIST,
};

#[derive(Parser)]
#[command(
    name = "hangman_helper",
    about = "Hangman assistant: ranks dictionary candidates and suggests letters by frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a word automatically (default - prompts for the word if omitted)
    Play {
        /// The secret word
        word: Option<String>,

        /// Candidate words to show each turn
        #[arg(short, long, default_value_t = DEFAULT_SUGGESTIONS)]
        suggestions: usize,

        /// Stop after this many incorrect guesses (default: no limit)
        #[arg(short, long)]
        max_misses: Option<usize>,
    },

    /// List candidate words for a pattern such as "c__" or "c  "
    Suggest {
        /// Known letters, with '_' or ' ' for unknown slots
        pattern: String,

        /// Letter or string that must not appear (repeatable)
        #[arg(short = 'x', long = "exclude")]
        exclude: Vec<String>,

        /// Maximum number of words to print
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show the letter guess order for a word length
    Order {
        /// Target word length
        length: usize,
    },

    /// Play random dictionary words and report statistics
    Benchmark {
        /// Number of random words to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Only use words of this length
        #[arg(short, long)]
        length: Option<usize>,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Stop each game after this many incorrect guesses
        #[arg(short, long)]
        max_misses: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Play {
        word: None,
        suggestions: DEFAULT_SUGGESTIONS,
        max_misses: None,
    });

    match command {
        Commands::Play {
            word,
            suggestions,
            max_misses,
        } => {
            // The target is checked before the dictionary is read
            let target = match read_target(word) {
                Ok(target) => target,
                // Bad input ends the session with a message, not a failure exit
                Err(CommandError::InvalidWord(e)) => {
                    println!("{}", e.to_string().red());
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };
            let solver = load_solver(&cli.wordlist)?;
            run_play_command(&solver, target.text().to_string(), suggestions, max_misses)
        }
        Commands::Suggest {
            pattern,
            exclude,
            limit,
        } => run_suggest_command(&load_solver(&cli.wordlist)?, pattern, exclude, limit),
        Commands::Order { length } => {
            print_order_result(&guess_order(length, &load_solver(&cli.wordlist)?));
            Ok(())
        }
        Commands::Benchmark {
            count,
            length,
            seed,
            max_misses,
        } => {
            run_benchmark_command(
                &load_solver(&cli.wordlist)?,
                BenchmarkConfig {
                    count,
                    length,
                    seed,
                    max_misses,
                    show_progress: true,
                },
            );
            Ok(())
        }
    }
}

/// Without a dictionary there is nothing to suggest
fn load_solver(wordlist: &str) -> Result<Solver> {
    Solver::from_file(wordlist)
        .with_context(|| format!("cannot start without a dictionary ({wordlist})"))
}

fn run_play_command(
    solver: &Solver,
    target: String,
    suggestions: usize,
    max_misses: Option<usize>,
) -> Result<()> {
    let config = PlayConfig {
        target,
        suggestions,
        max_misses,
    };

    let result = play_word(&config, solver)?;
    print_play_result(&result);
    Ok(())
}

fn run_suggest_command(
    solver: &Solver,
    pattern: String,
    exclude: Vec<String>,
    limit: usize,
) -> Result<()> {
    let result = suggest_words(
        SuggestConfig {
            pattern,
            exclude,
            limit,
        },
        solver,
    )?;
    print_suggest_result(&result);
    Ok(())
}

fn run_benchmark_command(solver: &Solver, config: BenchmarkConfig) {
    let targets = sample_targets(solver, &config);

    match config.length {
        Some(length) => println!(
            "Running benchmark on {} random {length}-letter words...",
            targets.len()
        ),
        None => println!("Running benchmark on {} random words...", targets.len()),
    }

    let result = run_benchmark(solver, &targets, &config);
    print_benchmark_result(&result);
}
