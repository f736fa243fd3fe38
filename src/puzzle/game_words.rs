//! The prepared word set a game runs on
//!
//! Raw list → candidates → graph → largest component → restricted graph.
//! Built once per configuration and shared read-only afterwards.

use super::generator::PuzzleGenerator;
use super::model::StepRange;
use crate::config::GameConfig;
use crate::core::Word;
use crate::error::PuzzleError;
use crate::graph::{GraphStats, WordGraph, find_connected_components, largest_component};
use crate::wordlists::{Dictionary, filter_candidates};
use log::info;

/// Words, graph and dictionary for one game configuration
#[derive(Debug, Clone)]
pub struct GameWords {
    words: Vec<Word>,
    graph: WordGraph,
    dictionary: Dictionary,
    stats: GraphStats,
    range: StepRange,
    max_attempts: usize,
}

impl GameWords {
    /// Prepare the game words from a raw list
    ///
    /// The sampling words are the largest connected component of the
    /// candidate graph, and the graph is restricted to them. Moves are
    /// checked against every entry of `raw`.
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::InvalidStepRange`] for a bad step range
    /// - [`PuzzleError::Graph`] if no raw entry passes the filter
    pub fn build<S: AsRef<str>>(raw: &[S], config: &GameConfig) -> Result<Self, PuzzleError> {
        let range = StepRange::new(config.min_steps, config.max_steps)?;

        let candidates = filter_candidates(raw, &config.filter());
        info!(
            "{} of {} raw words are {}-letter candidates",
            candidates.len(),
            raw.len(),
            config.word_length
        );

        let full = config.graph_builder.build(&candidates);
        let components = find_connected_components(&full)?;
        let stats = GraphStats::compute(&full, &components);
        let largest = largest_component(&components)?;
        info!(
            "{} graph: {} edges, {} components, largest has {} words",
            config.graph_builder.name(),
            stats.edges,
            stats.components,
            largest.len()
        );

        let graph = full.subgraph(largest.words());
        let words = graph.words().to_vec();

        Ok(Self {
            words,
            graph,
            dictionary: Dictionary::from_words(raw),
            stats,
            range,
            max_attempts: config.max_attempts,
        })
    }

    /// Sampling words (the largest component, in graph order)
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Graph restricted to the sampling words
    #[must_use]
    pub const fn graph(&self) -> &WordGraph {
        &self.graph
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Statistics of the unrestricted candidate graph
    #[must_use]
    pub const fn stats(&self) -> &GraphStats {
        &self.stats
    }

    #[must_use]
    pub const fn range(&self) -> StepRange {
        self.range
    }

    /// Generator over these words with the configured range and attempt cap
    ///
    /// # Errors
    ///
    /// Propagates [`PuzzleGenerator::new`] errors.
    pub fn generator(&self) -> Result<PuzzleGenerator<'_>, PuzzleError> {
        Ok(PuzzleGenerator::new(&self.words, &self.graph, self.range)?
            .with_max_attempts(self.max_attempts))
    }
}
