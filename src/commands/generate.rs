//! Puzzle generation command
//!
//! Generates one or more puzzles from the prepared game words. A seed makes
//! the run reproducible; without one, puzzles are generated in parallel.

use crate::error::PuzzleError;
use crate::puzzle::{GameWords, Generated};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Options for the generate command
#[derive(Debug, Clone, Copy)]
pub struct GenerateConfig {
    pub count: usize,
    pub seed: Option<u64>,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count, seed: None }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Puzzles produced by one run
#[derive(Debug)]
pub struct GenerateResult {
    pub puzzles: Vec<Generated>,
    pub duration: Duration,
}

impl GenerateResult {
    /// Sampled pairs across all puzzles
    #[must_use]
    pub fn total_attempts(&self) -> usize {
        self.puzzles.iter().map(|g| g.attempts).sum()
    }
}

/// Generate `config.count` puzzles
///
/// # Errors
///
/// Returns the first generation error (typically
/// [`PuzzleError::GenerationExhausted`]).
pub fn generate_puzzles(
    game: &GameWords,
    config: GenerateConfig,
) -> Result<GenerateResult, PuzzleError> {
    let generator = game.generator()?;
    let start = Instant::now();

    let puzzles = match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..config.count)
                .map(|_| generator.generate_counted(&mut rng))
                .collect::<Result<Vec<_>, _>>()?
        }
        None => generator
            .generate_batch(config.count)
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(GenerateResult {
        puzzles,
        duration: start.elapsed(),
    })
}
