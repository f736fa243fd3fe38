//! Puzzle value types

use crate::core::Word;
use crate::error::PuzzleError;
use crate::graph::WordGraph;
use std::fmt;
use std::ops::RangeInclusive;

/// Inclusive bounds on the number of moves a puzzle's shortest solution takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRange {
    min: usize,
    max: usize,
}

impl StepRange {
    /// Create a step range
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidStepRange`] unless `1 <= min <= max`.
    pub const fn new(min: usize, max: usize) -> Result<Self, PuzzleError> {
        if min == 0 || min > max {
            return Err(PuzzleError::InvalidStepRange {
                min_steps: min,
                max_steps: max,
            });
        }
        Ok(Self { min, max })
    }

    #[inline]
    #[must_use]
    pub const fn min(self) -> usize {
        self.min
    }

    #[inline]
    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Check if a move count lies within the range
    #[inline]
    #[must_use]
    pub const fn contains(self, moves: usize) -> bool {
        self.min <= moves && moves <= self.max
    }
}

impl TryFrom<RangeInclusive<usize>> for StepRange {
    type Error = PuzzleError;

    fn try_from(range: RangeInclusive<usize>) -> Result<Self, Self::Error> {
        Self::new(*range.start(), *range.end())
    }
}

impl fmt::Display for StepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// A start/target pair with a known shortest solution
///
/// `sample_path` runs from `start` to `target`, each step one letter apart;
/// its move count is `sample_path.len() - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    start: Word,
    target: Word,
    sample_path: Vec<Word>,
}

impl Puzzle {
    /// Assemble a puzzle from a solution path
    ///
    /// Returns `None` for an empty path.
    #[must_use]
    pub fn from_path(sample_path: Vec<Word>) -> Option<Self> {
        let start = sample_path.first()?.clone();
        let target = sample_path.last()?.clone();
        Some(Self {
            start,
            target,
            sample_path,
        })
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> &Word {
        &self.start
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn sample_path(&self) -> &[Word] {
        &self.sample_path
    }

    /// Moves in the sample solution (the par for the puzzle)
    #[inline]
    #[must_use]
    pub fn moves(&self) -> usize {
        self.sample_path.len().saturating_sub(1)
    }

    /// Re-check the puzzle against a graph and step range
    ///
    /// True when the path starts and ends at the puzzle words, every
    /// consecutive pair is a graph edge, and the move count is in `range`.
    #[must_use]
    pub fn verify(&self, graph: &WordGraph, range: StepRange) -> bool {
        self.sample_path.first() == Some(&self.start)
            && self.sample_path.last() == Some(&self.target)
            && self
                .sample_path
                .windows(2)
                .all(|pair| graph.are_adjacent(pair[0].text(), pair[1].text()))
            && range.contains(self.moves())
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({} moves)", self.start, self.target, self.moves())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn step_range_validation() {
        assert!(StepRange::new(1, 1).is_ok());
        assert!(StepRange::new(2, 5).is_ok());
        assert_eq!(
            StepRange::new(0, 3),
            Err(PuzzleError::InvalidStepRange {
                min_steps: 0,
                max_steps: 3
            })
        );
        assert!(StepRange::new(4, 3).is_err());
    }

    #[test]
    fn step_range_contains_is_inclusive() {
        let range = StepRange::try_from(2..=5).unwrap();
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(5));
        assert!(!range.contains(6));
        assert_eq!(range.to_string(), "2..=5");
    }

    #[test]
    fn puzzle_from_path() {
        let puzzle = Puzzle::from_path(words(&["cat", "cot", "cog"])).unwrap();
        assert_eq!(puzzle.start().text(), "cat");
        assert_eq!(puzzle.target().text(), "cog");
        assert_eq!(puzzle.moves(), 2);
        assert_eq!(puzzle.to_string(), "cat -> cog (2 moves)");
    }

    #[test]
    fn puzzle_from_empty_path() {
        assert!(Puzzle::from_path(Vec::new()).is_none());
    }

    #[test]
    fn verify_accepts_valid_puzzle() {
        let graph = build_graph(&words(&["cat", "cot", "cog", "dog", "dot"]));
        let puzzle = Puzzle::from_path(words(&["cat", "cot", "cog"])).unwrap();
        assert!(puzzle.verify(&graph, StepRange::new(1, 2).unwrap()));
    }

    #[test]
    fn verify_rejects_out_of_range() {
        let graph = build_graph(&words(&["cat", "cot", "cog", "dog", "dot"]));
        let puzzle = Puzzle::from_path(words(&["cat", "cot", "cog", "dog"])).unwrap();
        assert!(!puzzle.verify(&graph, StepRange::new(1, 2).unwrap()));
        assert!(puzzle.verify(&graph, StepRange::new(1, 3).unwrap()));
    }

    #[test]
    fn verify_rejects_broken_chain() {
        let graph = build_graph(&words(&["cat", "cot", "cog", "dog", "dot"]));
        let puzzle = Puzzle::from_path(words(&["cat", "cog"])).unwrap();
        assert!(!puzzle.verify(&graph, StepRange::new(1, 5).unwrap()));
    }
}
