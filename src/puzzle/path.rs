//! Depth-bounded shortest paths
//!
//! Breadth-first search from a start word that never expands a node more
//! than `max_depth` edges from the start, so the work done per search is
//! bounded even on large graphs.

use crate::core::Word;
use crate::graph::WordGraph;
use std::collections::VecDeque;

/// Find a shortest path of at most `max_depth` moves from `start` to `end`
///
/// Returns the path as a word sequence including both endpoints, or `None`
/// if either word is not in the graph or `end` is farther than `max_depth`
/// moves away. A start equal to the end yields the one-word path.
///
/// # Examples
/// ```
/// use morphology::core::Word;
/// use morphology::graph::build_graph;
/// use morphology::puzzle::shortest_path;
///
/// let words: Vec<Word> = ["cat", "cot", "cog", "dog"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let graph = build_graph(&words);
///
/// let path = shortest_path(&graph, "cat", "dog", 3).unwrap();
/// assert_eq!(path.len(), 4);
/// assert!(shortest_path(&graph, "cat", "dog", 2).is_none());
/// ```
#[must_use]
pub fn shortest_path(
    graph: &WordGraph,
    start: &str,
    end: &str,
    max_depth: usize,
) -> Option<Vec<Word>> {
    let start = graph.index_of(start)?;
    let end = graph.index_of(end)?;

    if start == end {
        return Some(vec![graph.word_at(start).clone()]);
    }

    // parent[i] is the node i was discovered from; depth[i] its distance
    let mut parent: Vec<Option<usize>> = vec![None; graph.len()];
    let mut depth: Vec<Option<usize>> = vec![None; graph.len()];
    let mut queue = VecDeque::new();

    depth[start] = Some(0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let current_depth = depth[current].unwrap_or(0);
        if current_depth >= max_depth {
            continue;
        }

        for &next in graph.neighbor_indices(current) {
            if depth[next].is_some() {
                continue;
            }
            depth[next] = Some(current_depth + 1);
            parent[next] = Some(current);

            if next == end {
                return Some(reconstruct(graph, &parent, end));
            }
            queue.push_back(next);
        }
    }

    None
}

/// Distances from `start` to every word within `max_depth` moves
///
/// Returned as `(word index, distance)` pairs in BFS order, start included.
#[must_use]
pub fn reachable_within(graph: &WordGraph, start: &str, max_depth: usize) -> Vec<(usize, usize)> {
    let Some(start) = graph.index_of(start) else {
        return Vec::new();
    };

    let mut depth: Vec<Option<usize>> = vec![None; graph.len()];
    let mut queue = VecDeque::new();
    let mut reached = Vec::new();

    depth[start] = Some(0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let current_depth = depth[current].unwrap_or(0);
        reached.push((current, current_depth));
        if current_depth >= max_depth {
            continue;
        }
        for &next in graph.neighbor_indices(current) {
            if depth[next].is_none() {
                depth[next] = Some(current_depth + 1);
                queue.push_back(next);
            }
        }
    }

    reached
}

fn reconstruct(graph: &WordGraph, parent: &[Option<usize>], end: usize) -> Vec<Word> {
    let mut path = vec![graph.word_at(end).clone()];
    let mut node = end;
    while let Some(previous) = parent[node] {
        path.push(graph.word_at(previous).clone());
        node = previous;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    fn ladder_graph() -> WordGraph {
        let words: Vec<Word> = ["cat", "cot", "cog", "dog", "dot", "elf"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        build_graph(&words)
    }

    fn texts(path: &[Word]) -> Vec<&str> {
        path.iter().map(Word::text).collect()
    }

    #[test]
    fn direct_neighbor() {
        let graph = ladder_graph();
        let path = shortest_path(&graph, "cat", "cot", 5).unwrap();
        assert_eq!(texts(&path), ["cat", "cot"]);
    }

    #[test]
    fn two_steps() {
        let graph = ladder_graph();
        let path = shortest_path(&graph, "cat", "cog", 2).unwrap();
        assert_eq!(texts(&path), ["cat", "cot", "cog"]);
    }

    #[test]
    fn shortest_of_two_routes() {
        // cot -> dog via cog or via dot, both two moves
        let graph = ladder_graph();
        let path = shortest_path(&graph, "cot", "dog", 5).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(texts(&path), ["cot", "cog", "dog"]);
    }

    #[test]
    fn depth_limit_is_respected() {
        let graph = ladder_graph();
        assert!(shortest_path(&graph, "cat", "dog", 2).is_none());
        assert_eq!(shortest_path(&graph, "cat", "dog", 3).unwrap().len(), 4);
    }

    #[test]
    fn zero_depth_reaches_nothing_else() {
        let graph = ladder_graph();
        assert!(shortest_path(&graph, "cat", "cot", 0).is_none());
    }

    #[test]
    fn same_start_and_end() {
        let graph = ladder_graph();
        let path = shortest_path(&graph, "cat", "cat", 0).unwrap();
        assert_eq!(texts(&path), ["cat"]);
    }

    #[test]
    fn unreachable_word() {
        let graph = ladder_graph();
        assert!(shortest_path(&graph, "cat", "elf", 10).is_none());
    }

    #[test]
    fn unknown_words() {
        let graph = ladder_graph();
        assert!(shortest_path(&graph, "cab", "cat", 3).is_none());
        assert!(shortest_path(&graph, "cat", "cab", 3).is_none());
    }

    #[test]
    fn path_steps_are_edges() {
        let graph = ladder_graph();
        let path = shortest_path(&graph, "dog", "cat", 5).unwrap();
        for pair in path.windows(2) {
            assert!(graph.are_adjacent(pair[0].text(), pair[1].text()));
        }
    }

    #[test]
    fn reachable_within_depth() {
        let graph = ladder_graph();
        let reached = reachable_within(&graph, "cat", 2);
        let words: Vec<(&str, usize)> = reached
            .iter()
            .map(|&(i, d)| (graph.word_at(i).text(), d))
            .collect();
        assert_eq!(words, [("cat", 0), ("cot", 1), ("cog", 2), ("dot", 2)]);
    }

    #[test]
    fn reachable_from_unknown_word() {
        let graph = ladder_graph();
        assert!(reachable_within(&graph, "cab", 3).is_empty());
    }
}
