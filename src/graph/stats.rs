//! Summary statistics for a word graph

use super::{Component, WordGraph};

/// Size and shape figures for a graph and its components
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    pub words: usize,
    pub edges: usize,
    pub components: usize,
    pub largest_component: usize,
    pub isolated_words: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
}

impl GraphStats {
    /// Compute statistics from a graph and its component partition
    #[must_use]
    pub fn compute(graph: &WordGraph, components: &[Component]) -> Self {
        let degrees = (0..graph.len()).map(|i| graph.neighbor_indices(i).len());
        let max_degree = degrees.clone().max().unwrap_or(0);
        let isolated_words = degrees.filter(|&d| d == 0).count();
        let edges = graph.edge_count();

        let mean_degree = if graph.is_empty() {
            0.0
        } else {
            (2 * edges) as f64 / graph.len() as f64
        };

        Self {
            words: graph.len(),
            edges,
            components: components.len(),
            largest_component: components.iter().map(Component::len).max().unwrap_or(0),
            isolated_words,
            max_degree,
            mean_degree,
        }
    }
}
