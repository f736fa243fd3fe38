//! Word lists and word filtering
//!
//! Provides the embedded raw word list, loaders for custom lists, the
//! candidate filter, and the move-validation dictionary.

pub mod dictionary;
mod embedded;
pub mod filter;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};
pub use filter::{FilterConfig, filter_candidates};
