//! Candidate word filtering
//!
//! Selects the words eligible for the game graph from a raw word list: fixed
//! length, strictly lowercase ASCII letters, optionally excluding a suffix
//! such as the plural "s".

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;

/// Filter settings for candidate selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Required word length in letters
    pub length: usize,
    /// Literal suffix to exclude (tail match); `None` keeps every ending
    pub exclude_suffix: Option<String>,
}

impl FilterConfig {
    /// Accept words of exactly `length` letters with no suffix exclusion
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            length,
            exclude_suffix: None,
        }
    }

    /// Also reject words ending in `suffix`
    ///
    /// An empty suffix is treated as no exclusion (every word ends in "").
    #[must_use]
    pub fn excluding_suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        self.exclude_suffix = (!suffix.is_empty()).then_some(suffix);
        self
    }

    /// Check a raw entry against the filter
    ///
    /// The check is strict: uppercase letters, punctuation, hyphens and
    /// non-ASCII letters all disqualify a word. A zero length accepts nothing.
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        if self.length == 0 || word.len() != self.length {
            return false;
        }

        if !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return false;
        }

        match &self.exclude_suffix {
            Some(suffix) => !word.ends_with(suffix.as_str()),
            None => true,
        }
    }
}

/// Select the candidate words from a raw word list
///
/// The result keeps first-occurrence order and contains no duplicates. Never
/// fails: an empty result is valid and left to the caller.
///
/// # Examples
/// ```
/// use morphology::wordlists::{FilterConfig, filter_candidates};
///
/// let raw = ["cat", "cats", "Cot", "cog", "dog", "cat", "do-g"];
/// let words = filter_candidates(&raw, &FilterConfig::new(3).excluding_suffix("s"));
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["cat", "cog", "dog"]);
/// ```
#[must_use]
pub fn filter_candidates<S: AsRef<str>>(words: &[S], config: &FilterConfig) -> Vec<Word> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    let candidates: Vec<Word> = words
        .iter()
        .map(S::as_ref)
        .filter(|word| config.accepts(word) && seen.insert(*word))
        .filter_map(|word| Word::new(word).ok())
        .collect();

    debug!(
        "Filtered {} raw words to {} candidates (length {}, excluding {:?})",
        words.len(),
        candidates.len(),
        config.length,
        config.exclude_suffix
    );

    candidates
}
