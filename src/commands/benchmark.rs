//! Benchmark command
//!
//! Plays many dictionary words automatically and reports how the frequency
//! guessing order performs.

use super::play::simulate;
use crate::core::Word;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of random words to play
    pub count: usize,
    /// Only play words of this length
    pub length: Option<usize>,
    /// Seed for reproducible sampling
    pub seed: Option<u64>,
    pub max_misses: Option<usize>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 100,
            length: None,
            seed: None,
            max_misses: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub won: usize,
    pub total_misses: usize,
    pub average_misses: f64,
    pub min_misses: usize,
    pub max_misses: usize,
    /// Incorrect-guess count → number of words
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.won as f64 / self.total_words as f64
        }
    }
}

/// Sample target words from the corpus
///
/// Only entries that are valid targets (letters only) qualify.
#[must_use]
pub fn sample_targets(solver: &Solver, config: &BenchmarkConfig) -> Vec<Word> {
    let pool: Vec<Word> = solver
        .corpus()
        .words()
        .iter()
        .filter(|w| config.length.is_none_or(|n| w.chars().count() == n))
        .filter_map(|w| Word::new(w).ok())
        .collect();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    pool.choose_multiple(&mut rng, config.count)
        .cloned()
        .collect()
}

/// Play every target and collect statistics
pub fn run_benchmark(
    solver: &Solver,
    targets: &[Word],
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    info!("benchmarking {} words", targets.len());

    let pb = if config.show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    // Make sure the shared caches are filled before fanning out
    solver.global_ranking();

    let start = Instant::now();
    let outcomes: Vec<(bool, usize)> = targets
        .par_iter()
        .map(|target| {
            let game = simulate(target.clone(), solver, config.max_misses);
            pb.inc(1);
            (game.is_won(), game.turns())
        })
        .collect();
    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut distribution = BTreeMap::new();
    for &(_, misses) in &outcomes {
        *distribution.entry(misses).or_insert(0) += 1;
    }

    let total_words = outcomes.len();
    let total_misses: usize = outcomes.iter().map(|&(_, misses)| misses).sum();

    BenchmarkResult {
        total_words,
        won: outcomes.iter().filter(|&&(won, _)| won).count(),
        total_misses,
        average_misses: if total_words == 0 {
            0.0
        } else {
            total_misses as f64 / total_words as f64
        },
        min_misses: distribution.keys().next().copied().unwrap_or(0),
        max_misses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Corpus;

    fn setup_solver() -> Solver {
        Solver::new(Corpus::from_words([
            "cat", "car", "can", "cot", "cut", "dog", "dig", "do", "go", "it's", "",
        ]))
    }

    fn quiet(count: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            seed: Some(7),
            show_progress: false,
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn sample_skips_invalid_entries() {
        let targets = sample_targets(&setup_solver(), &quiet(100));
        assert_eq!(targets.len(), 9);
        assert!(targets.iter().all(|w| w.text().chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn sample_filters_by_length() {
        let config = BenchmarkConfig {
            length: Some(2),
            ..quiet(100)
        };
        let mut targets: Vec<String> = sample_targets(&setup_solver(), &config)
            .iter()
            .map(|w| w.text().to_string())
            .collect();
        targets.sort();
        assert_eq!(targets, vec!["do", "go"]);
    }

    #[test]
    fn sample_is_reproducible_with_seed() {
        let solver = setup_solver();
        let first = sample_targets(&solver, &quiet(4));
        let second = sample_targets(&solver, &quiet(4));
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn sample_fills_count_despite_invalid_entries() {
        let mut words: Vec<String> = (0..10).map(|i| format!("x{i}")).collect();
        words.extend(
            ["cat", "car", "can", "cot", "cut", "dog", "dig", "bat", "bet", "bit"]
                .map(String::from),
        );
        let solver = Solver::new(Corpus::new(words));

        let config = BenchmarkConfig {
            seed: Some(1),
            ..quiet(10)
        };
        let targets = sample_targets(&solver, &config);
        assert_eq!(targets.len(), 10);

        let config = BenchmarkConfig {
            seed: Some(1),
            ..quiet(6)
        };
        assert_eq!(sample_targets(&solver, &config).len(), 6);
    }

    #[test]
    fn benchmark_counts_every_word() {
        let solver = setup_solver();
        let targets = sample_targets(&solver, &quiet(100));
        let result = run_benchmark(&solver, &targets, &quiet(100));

        assert_eq!(result.total_words, targets.len());
        // Every corpus word is reachable through its own length's ranking
        assert_eq!(result.won, result.total_words);
        assert!((result.win_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let solver = setup_solver();
        let targets = sample_targets(&solver, &quiet(100));
        let result = run_benchmark(&solver, &targets, &quiet(100));

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
        assert!(result.average_misses >= result.min_misses as f64);
        assert!(result.average_misses <= result.max_misses as f64);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let solver = setup_solver();
        let result = run_benchmark(&solver, &[], &quiet(0));

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_misses, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_with_miss_cap() {
        let solver = setup_solver();
        let targets = vec![Word::new("zap").unwrap()];
        let config = BenchmarkConfig {
            max_misses: Some(3),
            ..quiet(1)
        };
        let result = run_benchmark(&solver, &targets, &config);

        assert_eq!(result.won, 0);
        assert_eq!(result.max_misses, 3);
    }
}
