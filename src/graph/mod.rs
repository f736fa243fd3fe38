//! Word graph construction and analysis
//!
//! Builds the one-letter-difference graph over candidate words and splits it
//! into connected components.

pub mod adjacency;
pub mod components;
pub mod stats;

pub use adjacency::{GraphBuilder, WordGraph, build_graph, build_graph_bucketed};
pub use components::{Component, find_connected_components, largest_component};
pub use stats::GraphStats;
