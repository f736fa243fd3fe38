//! Graph analysis command
//!
//! Reports the shape of the word graph, and optionally how a single word sits
//! in it: its neighbors and how many words lie at each distance.

use crate::core::Word;
use crate::graph::GraphStats;
use crate::puzzle::{GameWords, StepRange, reachable_within};

/// Result of analyzing the game graph
pub struct AnalysisResult {
    pub stats: GraphStats,
    pub playable_words: usize,
    pub dictionary_words: usize,
    pub range: StepRange,
}

/// Result of analyzing one word
pub struct WordAnalysis {
    pub word: String,
    pub neighbors: Vec<String>,
    /// `by_distance[d]` is the number of words exactly `d` moves away, up to
    /// the farthest word reached within the step range
    pub by_distance: Vec<usize>,
    /// Words whose distance lies in the step range
    pub puzzle_targets: usize,
    pub range: StepRange,
}

/// Summarize the prepared game words
#[must_use]
pub fn analyze_graph(game: &GameWords) -> AnalysisResult {
    AnalysisResult {
        stats: game.stats().clone(),
        playable_words: game.words().len(),
        dictionary_words: game.dictionary().len(),
        range: game.range(),
    }
}

/// Analyze a word's position in the game graph
///
/// # Errors
///
/// Returns an error if the word is malformed or not one of the playable
/// words (the largest component).
pub fn analyze_word(word: &str, game: &GameWords) -> Result<WordAnalysis, String> {
    let word = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;
    let graph = game.graph();

    let neighbors: Vec<String> = graph
        .neighbors(word.text())
        .ok_or_else(|| format!("Word '{word}' is not a playable word"))?
        .map(|w| w.text().to_string())
        .collect();

    let range = game.range();
    let reached = reachable_within(graph, word.text(), range.max());

    // Sized by what BFS reached; the range bound may be far larger
    let farthest = reached.iter().map(|&(_, d)| d).max().unwrap_or(0);
    let mut by_distance = vec![0; farthest + 1];
    for &(_, distance) in &reached {
        by_distance[distance] += 1;
    }

    let puzzle_targets = reached
        .iter()
        .filter(|&&(_, d)| range.contains(d))
        .count();

    Ok(WordAnalysis {
        word: word.into_string(),
        neighbors,
        by_distance,
        puzzle_targets,
        range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn ladder_game(max_steps: usize) -> GameWords {
        let config = GameConfig {
            word_length: 3,
            min_steps: 1,
            max_steps,
            ..GameConfig::default()
        };
        GameWords::build(&["cat", "cot", "cog", "dog", "dot", "elf"], &config).unwrap()
    }

    #[test]
    fn graph_summary() {
        let result = analyze_graph(&ladder_game(2));
        assert_eq!(result.stats.words, 6);
        assert_eq!(result.stats.components, 2);
        assert_eq!(result.playable_words, 5);
        assert_eq!(result.dictionary_words, 6);
    }

    #[test]
    fn word_distances() {
        let result = analyze_word("cat", &ladder_game(3)).unwrap();
        assert_eq!(result.neighbors, ["cot"]);
        // cat | cot | cog dot | dog
        assert_eq!(result.by_distance, [1, 1, 2, 1]);
        assert_eq!(result.puzzle_targets, 4);
    }

    #[test]
    fn distances_stop_at_max_steps() {
        let result = analyze_word("cat", &ladder_game(2)).unwrap();
        assert_eq!(result.by_distance, [1, 1, 2]);
        assert_eq!(result.puzzle_targets, 3);
    }

    #[test]
    fn huge_max_steps_covers_the_whole_component() {
        let config = GameConfig {
            word_length: 3,
            min_steps: 2,
            max_steps: usize::MAX,
            ..GameConfig::default()
        };
        let game =
            GameWords::build(&["cat", "cot", "cog", "dog", "dot", "elf"], &config).unwrap();

        let result = analyze_word("cat", &game).unwrap();
        assert_eq!(result.by_distance, [1, 1, 2, 1]);
        assert_eq!(result.puzzle_targets, 3);
    }

    #[test]
    fn word_outside_component() {
        assert!(analyze_word("elf", &ladder_game(2)).is_err());
        assert!(analyze_word("c4t", &ladder_game(2)).is_err());
    }
}
