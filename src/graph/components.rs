//! Connected components of the word graph
//!
//! Components are discovered by breadth-first search with an explicit queue,
//! rooted at each unvisited key in graph order.

use super::WordGraph;
use crate::core::Word;
use crate::error::GraphError;
use log::debug;
use std::collections::VecDeque;

/// A maximal set of mutually reachable words
///
/// Members are listed in BFS discovery order; the first member is the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    words: Vec<Word>,
}

impl Component {
    /// Number of words in the component
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the component has no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Members in discovery order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The word the traversal started from
    #[must_use]
    pub fn root(&self) -> Option<&Word> {
        self.words.first()
    }

    /// Linear membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.text() == word)
    }

    /// Consume the component, returning its words
    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }
}

/// Partition the graph's keys into connected components
///
/// Every key is visited exactly once, either as a root or as a member of an
/// earlier root's component. Components appear in the order their roots are
/// reached while scanning keys in graph order.
///
/// # Errors
///
/// Returns [`GraphError::EmptyInput`] if the graph has no words.
pub fn find_connected_components(graph: &WordGraph) -> Result<Vec<Component>, GraphError> {
    if graph.is_empty() {
        return Err(GraphError::EmptyInput);
    }

    let mut visited = vec![false; graph.len()];
    let mut queue = VecDeque::new();
    let mut components = Vec::new();

    for root in 0..graph.len() {
        if visited[root] {
            continue;
        }

        visited[root] = true;
        queue.push_back(root);
        let mut members = Vec::new();

        while let Some(current) = queue.pop_front() {
            members.push(graph.word_at(current).clone());
            for &next in graph.neighbor_indices(current) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        components.push(Component { words: members });
    }

    debug!(
        "Found {} components over {} words",
        components.len(),
        graph.len()
    );

    Ok(components)
}

/// Pick the component with the most words
///
/// Ties go to the component that appears first.
///
/// # Errors
///
/// Returns [`GraphError::EmptyInput`] if `components` is empty.
pub fn largest_component(components: &[Component]) -> Result<&Component, GraphError> {
    let (first, rest) = components.split_first().ok_or(GraphError::EmptyInput)?;

    // Strict comparison keeps the earliest of equal-sized components
    Ok(rest
        .iter()
        .fold(first, |best, c| if c.len() > best.len() { c } else { best }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    fn graph_of(list: &[&str]) -> WordGraph {
        let words: Vec<Word> = list.iter().map(|w| Word::new(*w).unwrap()).collect();
        build_graph(&words)
    }

    fn texts(component: &Component) -> Vec<&str> {
        component.words().iter().map(Word::text).collect()
    }

    #[test]
    fn ladder_is_one_component() {
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot"]);
        let components = find_connected_components(&graph).unwrap();

        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 5);
        assert_eq!(components[0].root().unwrap().text(), "cat");
    }

    #[test]
    fn discovery_order_is_bfs() {
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot"]);
        let components = find_connected_components(&graph).unwrap();
        // cat -> cot -> {cog, dot} -> dog
        assert_eq!(texts(&components[0]), ["cat", "cot", "cog", "dot", "dog"]);
    }

    #[test]
    fn isolated_words_form_singletons() {
        let graph = graph_of(&["elf", "cat", "cot", "gnu"]);
        let components = find_connected_components(&graph).unwrap();

        let sizes: Vec<usize> = components.iter().map(Component::len).collect();
        assert_eq!(sizes, [1, 2, 1]);
        assert_eq!(texts(&components[0]), ["elf"]);
        assert_eq!(texts(&components[2]), ["gnu"]);
    }

    #[test]
    fn empty_graph_is_an_error() {
        let graph = graph_of(&[]);
        assert_eq!(
            find_connected_components(&graph),
            Err(GraphError::EmptyInput)
        );
    }

    #[test]
    fn largest_of_empty_is_an_error() {
        assert_eq!(largest_component(&[]), Err(GraphError::EmptyInput));
    }

    #[test]
    fn largest_picks_biggest() {
        let graph = graph_of(&["elf", "cat", "cot", "cog", "ant", "and"]);
        let components = find_connected_components(&graph).unwrap();
        let largest = largest_component(&components).unwrap();
        assert_eq!(texts(largest), ["cat", "cot", "cog"]);
    }

    #[test]
    fn largest_ties_go_to_first_discovered() {
        let graph = graph_of(&["ant", "and", "cat", "cot"]);
        let components = find_connected_components(&graph).unwrap();
        assert_eq!(components.len(), 2);

        let largest = largest_component(&components).unwrap();
        assert_eq!(largest.root().unwrap().text(), "ant");
    }

    #[test]
    fn component_contains() {
        let graph = graph_of(&["cat", "cot", "elf"]);
        let components = find_connected_components(&graph).unwrap();
        assert!(components[0].contains("cot"));
        assert!(!components[0].contains("elf"));
    }

    #[test]
    fn large_graph_components_cover_every_word() {
        // 2000 distinct 11-letter words over {a, b}: a dense hypercube slice
        let mut list = Vec::new();
        for i in 0..2000_usize {
            let word: String = format!("{i:011b}")
                .chars()
                .map(|c| if c == '0' { 'a' } else { 'b' })
                .collect();
            list.push(word);
        }
        let words: Vec<Word> = list.iter().map(|w| Word::new(w.as_str()).unwrap()).collect();
        let graph = build_graph(&words);
        let components = find_connected_components(&graph).unwrap();
        let total: usize = components.iter().map(Component::len).sum();
        assert_eq!(total, 2000);
    }

    proptest! {
        #[test]
        fn components_partition_the_keys(raw in prop::collection::vec("[abc]{3}", 1..50)) {
            let words: Vec<Word> = raw.iter().map(|w| Word::new(w.as_str()).unwrap()).collect();
            let graph = build_graph(&words);
            let components = find_connected_components(&graph).unwrap();

            let mut seen = FxHashSet::default();
            for component in &components {
                prop_assert!(!component.is_empty());
                for word in component.words() {
                    prop_assert!(seen.insert(word.text().to_string()), "{} seen twice", word);
                }
            }
            prop_assert_eq!(seen.len(), graph.len());

            let largest = largest_component(&components).unwrap();
            prop_assert!(components.iter().all(|c| c.len() <= largest.len()));
        }

        #[test]
        fn no_edges_between_components(raw in prop::collection::vec("[abc]{3}", 1..50)) {
            let words: Vec<Word> = raw.iter().map(|w| Word::new(w.as_str()).unwrap()).collect();
            let graph = build_graph(&words);
            let components = find_connected_components(&graph).unwrap();

            for (i, a) in components.iter().enumerate() {
                for b in &components[i + 1..] {
                    for x in a.words() {
                        for y in b.words() {
                            prop_assert!(!graph.are_adjacent(x.text(), y.text()));
                        }
                    }
                }
            }
        }
    }
}
