//! Benchmark command
//!
//! Times both graph builders on the candidate words, then generates a batch
//! of puzzles and records how many samples each one took.

use crate::config::GameConfig;
use crate::error::PuzzleError;
use crate::graph::{build_graph, build_graph_bucketed};
use crate::puzzle::GameWords;
use crate::wordlists::filter_candidates;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub candidates: usize,
    pub edges: usize,
    pub pairwise_time: Duration,
    pub bucketed_time: Duration,
    pub builders_agree: bool,
    pub total_puzzles: usize,
    pub failures: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    pub max_attempts: usize,
    /// Puzzle count per move count
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Run the benchmark
///
/// # Errors
///
/// Returns an error if the game words cannot be built (no candidates or a bad
/// step range). Individual generation failures are counted, not returned.
pub fn run_benchmark<S: AsRef<str>>(
    raw: &[S],
    config: &GameConfig,
    count: usize,
    show_progress: bool,
) -> Result<BenchmarkResult, PuzzleError> {
    let candidates = filter_candidates(raw, &config.filter());

    let start = Instant::now();
    let pairwise = build_graph(&candidates);
    let pairwise_time = start.elapsed();

    let start = Instant::now();
    let bucketed = build_graph_bucketed(&candidates);
    let bucketed_time = start.elapsed();

    let game = GameWords::build(raw, config)?;
    let generator = game.generator()?;

    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut rng = rand::rng();
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_attempts = 0;
    let mut max_attempts = 0;
    let mut failures = 0;

    let start = Instant::now();
    for _ in 0..count {
        match generator.generate_counted(&mut rng) {
            Ok(generated) => {
                total_attempts += generated.attempts;
                max_attempts = max_attempts.max(generated.attempts);
                *distribution.entry(generated.puzzle.moves()).or_insert(0) += 1;
                pb.set_message(generated.puzzle.to_string());
            }
            Err(err) => {
                failures += 1;
                pb.set_message(err.to_string());
            }
        }
        pb.inc(1);
    }
    let duration = start.elapsed();
    pb.finish_and_clear();

    let solved = count - failures;
    Ok(BenchmarkResult {
        candidates: candidates.len(),
        edges: pairwise.edge_count(),
        pairwise_time,
        bucketed_time,
        builders_agree: pairwise == bucketed,
        total_puzzles: count,
        failures,
        total_attempts,
        average_attempts: if solved == 0 {
            0.0
        } else {
            total_attempts as f64 / solved as f64
        },
        max_attempts,
        distribution,
        duration,
        puzzles_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(WORDS, &GameConfig::default(), 10, false).unwrap();

        assert_eq!(result.candidates, 423);
        assert!(result.builders_agree);
        assert_eq!(result.total_puzzles, 10);
        assert_eq!(result.failures, 0);
        assert!(result.average_attempts >= 1.0);
        assert!(result.max_attempts >= 1);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(WORDS, &GameConfig::default(), 10, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_puzzles - result.failures);
        for moves in result.distribution.keys() {
            assert!((2..=5).contains(moves));
        }
    }

    #[test]
    fn benchmark_counts_failures() {
        let config = GameConfig {
            word_length: 3,
            min_steps: 1,
            max_steps: 1,
            max_attempts: 5,
            ..GameConfig::default()
        };
        let result = run_benchmark(&["elf"], &config, 3, false).unwrap();

        assert_eq!(result.failures, 3);
        assert!(result.distribution.is_empty());
        assert!(result.average_attempts.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_without_candidates() {
        assert!(run_benchmark(&["Paris"], &GameConfig::default(), 1, false).is_err());
    }
}
