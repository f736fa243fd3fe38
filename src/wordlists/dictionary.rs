//! Move-validation dictionary
//!
//! Moves are checked against the full raw word list, not just the graph
//! candidates, so any real word of the right length is a legal step.

use rustc_hash::FxHashSet;

/// Case-insensitive set of known words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed and lowercased; blank entries are skipped.
    #[must_use]
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        words.iter().collect()
    }

    /// Check membership, ignoring case and surrounding whitespace
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.trim().to_lowercase().as_str())
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("house"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dictionary = Dictionary::from_words(&["House", "horse"]);
        assert!(dictionary.contains("house"));
        assert!(dictionary.contains("HOUSE"));
        assert!(dictionary.contains("Horse"));
        assert!(!dictionary.contains("mouse"));
    }

    #[test]
    fn duplicates_and_blanks_collapse() {
        let dictionary = Dictionary::from_words(&["cat", "CAT", " cat ", "", "   "]);
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn keeps_entries_of_every_length() {
        let dictionary: Dictionary = ["cat", "house", "lancet"].into_iter().collect();
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("lancet"));
    }
}
