//! Core domain types for word ladders
//!
//! This module contains the fundamental value types and the letter-difference
//! measures everything else is built on. No I/O, no randomness.

mod distance;
mod word;

pub use distance::{differs_by_one_letter, hamming_distance, is_one_apart};
pub use word::{Word, WordError};
