//! Word adjacency graph
//!
//! Nodes are words; an undirected edge joins two words of equal length that
//! differ in exactly one position. Words of different lengths are never
//! connected, so mixed-length input is allowed and simply yields no edges
//! across lengths.
//!
//! Keys keep first-occurrence input order, which makes every traversal over
//! the graph deterministic.

use crate::core::{Word, is_one_apart};
use log::debug;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Placeholder letter for the blanked position in a bucket pattern
const WILDCARD: u8 = b'*';

/// Immutable adjacency list over a set of words
///
/// Neighbor lists are stored as sorted indices into the key list. The graph
/// is symmetric and has no self-loops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordGraph {
    words: Vec<Word>,
    index: FxHashMap<Word, usize>,
    neighbors: Vec<Vec<usize>>,
}

impl WordGraph {
    /// Number of words (keys), isolated words included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the graph has no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All keys in graph order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Check if a word is a key of the graph
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Position of a word in the key order
    #[inline]
    #[must_use]
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Word at a key position
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn word_at(&self, index: usize) -> &Word {
        &self.words[index]
    }

    /// Sorted neighbor positions of the word at `index`
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn neighbor_indices(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    /// Neighbors of a word, or `None` if the word is not a key
    pub fn neighbors<'a>(
        &'a self,
        word: &str,
    ) -> Option<impl Iterator<Item = &'a Word> + use<'a>> {
        let index = self.index_of(word)?;
        Some(self.neighbors[index].iter().map(|&i| &self.words[i]))
    }

    /// Number of neighbors of a word
    #[must_use]
    pub fn degree(&self, word: &str) -> Option<usize> {
        self.index_of(word).map(|i| self.neighbors[i].len())
    }

    /// Check if two words are joined by an edge
    #[must_use]
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => self.neighbors[i].binary_search(&j).is_ok(),
            _ => false,
        }
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Every undirected edge once, as `(earlier key, later key)`
    pub fn edges(&self) -> impl Iterator<Item = (&Word, &Word)> + '_ {
        self.neighbors.iter().enumerate().flat_map(move |(i, list)| {
            list.iter()
                .filter(move |&&j| j > i)
                .map(move |&j| (&self.words[i], &self.words[j]))
        })
    }

    /// Restrict the graph to the given words
    ///
    /// Keys keep this graph's order; words not in the graph are ignored and
    /// edges leaving the kept set are dropped.
    #[must_use]
    pub fn subgraph(&self, keep: &[Word]) -> Self {
        let keep: FxHashSet<&str> = keep.iter().map(Word::text).collect();

        // Old index -> new index for kept words
        let mut remap: Vec<Option<usize>> = vec![None; self.words.len()];
        let mut words = Vec::with_capacity(keep.len());
        for (old, word) in self.words.iter().enumerate() {
            if keep.contains(word.text()) {
                remap[old] = Some(words.len());
                words.push(word.clone());
            }
        }

        let neighbors = self
            .neighbors
            .iter()
            .enumerate()
            .filter(|(old, _)| remap[*old].is_some())
            .map(|(_, list)| list.iter().filter_map(|&j| remap[j]).collect())
            .collect();

        Self::from_parts(words, neighbors)
    }

    fn from_parts(words: Vec<Word>, neighbors: Vec<Vec<usize>>) -> Self {
        let index = words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.clone(), i))
            .collect();
        Self {
            words,
            index,
            neighbors,
        }
    }
}

/// Choice of graph construction algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphBuilder {
    /// Compare every pair of words: O(n²·L)
    #[default]
    Pairwise,
    /// Group words by wildcard pattern: O(n·L) expected
    Bucketed,
}

impl GraphBuilder {
    /// Build a graph with this algorithm
    #[must_use]
    pub fn build(self, words: &[Word]) -> WordGraph {
        match self {
            Self::Pairwise => build_graph(words),
            Self::Bucketed => build_graph_bucketed(words),
        }
    }

    /// Create builder from name string
    ///
    /// Supported names: "pairwise", "bucketed" (alias "bucket").
    /// Defaults to pairwise if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "bucketed" | "bucket" => Self::Bucketed,
            _ => Self::Pairwise,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pairwise => "pairwise",
            Self::Bucketed => "bucketed",
        }
    }
}

/// Build the adjacency graph by comparing every unordered pair of words
///
/// Every input word becomes a key, isolated or not. Repeated words are
/// collapsed to their first occurrence. The upper triangle of the comparison
/// matrix is computed in parallel, one row per task.
///
/// # Examples
/// ```
/// use morphology::core::Word;
/// use morphology::graph::build_graph;
///
/// let words: Vec<Word> = ["cat", "cot", "dog"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let graph = build_graph(&words);
///
/// assert!(graph.are_adjacent("cat", "cot"));
/// assert_eq!(graph.degree("dog"), Some(0));
/// ```
#[must_use]
pub fn build_graph(words: &[Word]) -> WordGraph {
    let words = unique_words(words);
    let n = words.len();

    let upper: Vec<Vec<usize>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let a = words[i].as_bytes();
            ((i + 1)..n)
                .filter(|&j| is_one_apart(a, words[j].as_bytes()))
                .collect()
        })
        .collect();

    // Rows are replayed in order, so every list comes out sorted
    let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, row) in upper.into_iter().enumerate() {
        for j in row {
            neighbors[i].push(j);
            neighbors[j].push(i);
        }
    }

    let graph = WordGraph::from_parts(words, neighbors);
    debug!(
        "Built pairwise graph: {} words, {} edges",
        graph.len(),
        graph.edge_count()
    );
    graph
}

/// Build the adjacency graph with a wildcard-bucket index
///
/// Each word is filed under every pattern obtained by blanking one position
/// ("house" → "*ouse", "h*use", …). Two distinct words share a bucket exactly
/// when they differ only at the blanked position, so every bucket is a clique
/// of neighbors. Produces the same edges as [`build_graph`].
#[must_use]
pub fn build_graph_bucketed(words: &[Word]) -> WordGraph {
    let words = unique_words(words);

    let mut buckets: FxHashMap<Vec<u8>, Vec<usize>> = FxHashMap::default();
    for (i, word) in words.iter().enumerate() {
        for position in 0..word.len() {
            let mut pattern = word.as_bytes().to_vec();
            pattern[position] = WILDCARD;
            buckets.entry(pattern).or_default().push(i);
        }
    }

    let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); words.len()];
    for members in buckets.values() {
        for (k, &a) in members.iter().enumerate() {
            for &b in &members[k + 1..] {
                neighbors[a].push(b);
                neighbors[b].push(a);
            }
        }
    }

    // Bucket iteration order is arbitrary
    for list in &mut neighbors {
        list.sort_unstable();
    }

    let graph = WordGraph::from_parts(words, neighbors);
    debug!(
        "Built bucketed graph: {} words, {} edges, {} buckets",
        graph.len(),
        graph.edge_count(),
        buckets.len()
    );
    graph
}

/// Drop repeated words, keeping first occurrences in order
fn unique_words(words: &[Word]) -> Vec<Word> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    words
        .iter()
        .filter(|word| seen.insert(word.text()))
        .cloned()
        .collect()
}
