//! Puzzle generation by rejection sampling
//!
//! Start and target words are drawn uniformly (with replacement) from the
//! sampling words. A depth-bounded BFS finds the shortest path between them;
//! the pair is kept when that path's move count lies in the step range.
//! Sampling stops after a fixed number of attempts so an impossible range
//! fails fast instead of looping forever.

use super::model::{Puzzle, StepRange};
use super::path::shortest_path;
use crate::core::Word;
use crate::error::PuzzleError;
use crate::graph::WordGraph;
use log::{debug, trace, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;

/// Default cap on sampled pairs per puzzle
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// A puzzle together with the number of pairs sampled to find it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub puzzle: Puzzle,
    pub attempts: usize,
}

/// Reusable puzzle generator over a fixed word set and graph
///
/// Holds only shared references, so one generator can serve many threads as
/// long as each brings its own random source.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    words: &'a [Word],
    graph: &'a WordGraph,
    range: StepRange,
    max_attempts: usize,
}

impl<'a> PuzzleGenerator<'a> {
    /// Create a generator
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::EmptyWordList`] if `words` is empty
    /// - [`PuzzleError::UnknownWord`] if a word is not a key of `graph`
    pub fn new(
        words: &'a [Word],
        graph: &'a WordGraph,
        range: StepRange,
    ) -> Result<Self, PuzzleError> {
        if words.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }

        if let Some(missing) = words.iter().find(|w| !graph.contains(w.text())) {
            return Err(PuzzleError::UnknownWord(missing.text().to_string()));
        }

        Ok(Self {
            words,
            graph,
            range,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    /// Override the attempt cap (at least one attempt is always made)
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    #[must_use]
    pub const fn range(&self) -> StepRange {
        self.range
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generate one puzzle
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::GenerationExhausted`] if no qualifying pair is
    /// found within the attempt cap.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Puzzle, PuzzleError> {
        self.generate_counted(rng).map(|generated| generated.puzzle)
    }

    /// Generate one puzzle, also reporting how many pairs were sampled
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::GenerationExhausted`] if no qualifying pair is
    /// found within the attempt cap.
    pub fn generate_counted<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Generated, PuzzleError> {
        for attempt in 1..=self.max_attempts {
            let (Some(start), Some(end)) = (self.words.choose(rng), self.words.choose(rng)) else {
                return Err(PuzzleError::EmptyWordList);
            };

            let path = shortest_path(self.graph, start.text(), end.text(), self.range.max());
            match path {
                Some(path) if self.range.contains(path.len() - 1) => {
                    let Some(puzzle) = Puzzle::from_path(path) else {
                        continue;
                    };
                    debug!("Generated {puzzle} after {attempt} attempts");
                    return Ok(Generated {
                        puzzle,
                        attempts: attempt,
                    });
                }
                Some(path) => {
                    trace!("Rejected {start} -> {end}: {} moves", path.len() - 1);
                }
                None => {
                    trace!("Rejected {start} -> {end}: not within {} moves", self.range.max());
                }
            }
        }

        warn!(
            "Gave up after {} attempts looking for a {} move puzzle",
            self.max_attempts, self.range
        );
        Err(PuzzleError::GenerationExhausted {
            attempts: self.max_attempts,
            min_steps: self.range.min(),
            max_steps: self.range.max(),
        })
    }

    /// Generate several puzzles in parallel
    ///
    /// Each worker draws from its own thread-local random source.
    #[must_use]
    pub fn generate_batch(&self, count: usize) -> Vec<Result<Generated, PuzzleError>> {
        (0..count)
            .into_par_iter()
            .map(|_| {
                let mut rng = rand::rng();
                self.generate_counted(&mut rng)
            })
            .collect()
    }
}

/// Generate a puzzle with the default attempt cap
///
/// `words` are the sampling words (typically the largest component) and must
/// all be keys of `graph`.
///
/// # Errors
///
/// - [`PuzzleError::InvalidStepRange`] unless `1 <= min_steps <= max_steps`
/// - [`PuzzleError::EmptyWordList`] / [`PuzzleError::UnknownWord`] for bad input
/// - [`PuzzleError::GenerationExhausted`] if the attempt cap is reached
///
/// # Examples
/// ```
/// use morphology::core::Word;
/// use morphology::graph::build_graph;
/// use morphology::puzzle::generate_puzzle;
///
/// let words: Vec<Word> = ["cat", "cot", "cog", "dog", "dot"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let graph = build_graph(&words);
///
/// let puzzle = generate_puzzle(&words, &graph, 1, 2, &mut rand::rng()).unwrap();
/// assert!((1..=2).contains(&puzzle.moves()));
/// ```
pub fn generate_puzzle<R: Rng + ?Sized>(
    words: &[Word],
    graph: &WordGraph,
    min_steps: usize,
    max_steps: usize,
    rng: &mut R,
) -> Result<Puzzle, PuzzleError> {
    let range = StepRange::new(min_steps, max_steps)?;
    PuzzleGenerator::new(words, graph, range)?.generate(rng)
}
