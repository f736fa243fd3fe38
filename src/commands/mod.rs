//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod check;
pub mod generate;
pub mod simple;

pub use analyze::{AnalysisResult, WordAnalysis, analyze_graph, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::{CheckResult, check_words};
pub use generate::{GenerateConfig, GenerateResult, generate_puzzles};
pub use simple::run_simple;
