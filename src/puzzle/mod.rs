//! Puzzle generation
//!
//! Samples start/target pairs from the largest component and keeps those
//! whose shortest path falls inside the configured step range.

pub mod game_words;
pub mod generator;
pub mod model;
pub mod path;

pub use game_words::GameWords;
pub use generator::{DEFAULT_MAX_ATTEMPTS, Generated, PuzzleGenerator, generate_puzzle};
pub use model::{Puzzle, StepRange};
pub use path::{reachable_within, shortest_path};
