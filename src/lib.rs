//! Morphology
//!
//! Word-ladder puzzle engine: turn a start word into a target word by
//! changing one letter at a time, with every step a real word.
//!
//! The engine filters a raw word list down to candidates, links candidates
//! that differ in exactly one letter, keeps the largest connected component,
//! and samples start/target pairs whose shortest route falls in a step range.
//!
//! # Quick Start
//!
//! ```rust
//! use morphology::config::GameConfig;
//! use morphology::game::{Session, SubmitOutcome};
//! use morphology::puzzle::GameWords;
//! use morphology::wordlists::WORDS;
//!
//! let game = GameWords::build(WORDS, &GameConfig::default()).unwrap();
//! let puzzle = game.generator().unwrap().generate(&mut rand::rng()).unwrap();
//!
//! // Replay the sample solution
//! let mut session = Session::new(puzzle.clone());
//! for word in &puzzle.sample_path()[1..] {
//!     session.submit(word.text(), game.dictionary()).unwrap();
//! }
//! assert!(session.is_won());
//! assert_eq!(session.moves(), puzzle.moves());
//! ```

// Core domain types
pub mod core;

// Typed errors
pub mod error;

// Game settings
pub mod config;

// Logger setup
pub mod logging;

// Word lists
pub mod wordlists;

// Word graph and components
pub mod graph;

// Puzzle generation
pub mod puzzle;

// Move rules and session state
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
