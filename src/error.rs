//! Error types for graph construction, puzzle generation and move validation.

use thiserror::Error;

/// Errors raised while analysing the word graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The graph (or the component list derived from it) has no words.
    #[error("no words available: the word graph is empty")]
    EmptyInput,
}

/// Errors raised while generating a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// There is nothing to sample start and target words from.
    #[error("cannot generate a puzzle from an empty word list")]
    EmptyWordList,

    /// A sampling word is not a key of the graph.
    #[error("word '{0}' is not in the word graph")]
    UnknownWord(String),

    /// The step bounds do not satisfy `1 <= min <= max`.
    #[error("invalid step range {min_steps}..={max_steps}: need 1 <= min <= max")]
    InvalidStepRange { min_steps: usize, max_steps: usize },

    /// The attempt cap was reached without finding a qualifying pair.
    #[error(
        "no puzzle with {min_steps}..={max_steps} moves found after {attempts} attempts \
         (is the step range compatible with the word graph?)"
    )]
    GenerationExhausted {
        attempts: usize,
        min_steps: usize,
        max_steps: usize,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Reasons a submitted word cannot extend the chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Not a valid word: '{0}'")]
    NotAWord(String),

    #[error("Must change exactly one letter ('{previous}' -> '{candidate}')")]
    NotOneLetterApart { previous: String, candidate: String },

    #[error("The puzzle is already solved")]
    GameOver,

    #[error("Nothing to undo")]
    NothingToUndo,
}

/// Invalid game configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word length must be greater than zero")]
    ZeroWordLength,

    #[error("invalid step range {min_steps}..={max_steps}: need 1 <= min <= max")]
    InvalidStepRange { min_steps: usize, max_steps: usize },

    #[error("attempt cap must be greater than zero")]
    ZeroAttempts,
}
