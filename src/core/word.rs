//! Word representation
//!
//! A Word is a non-empty string of lowercase ASCII letters. Input is
//! case-normalized on construction so every comparison downstream is exact.

use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// A validated, lowercase word
///
/// Words are immutable once built. Equality, ordering and hashing are those of
/// the underlying text, so a `Word` can be looked up in maps by `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use morphology::core::Word;
    ///
    /// let word = Word::new("House").unwrap();
    /// assert_eq!(word.text(), "house");
    ///
    /// assert!(Word::new("o'clock").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes (one byte per letter)
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Consume the word, returning its text
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("house").unwrap();
        assert_eq!(word.text(), "house");
        assert_eq!(word.as_bytes(), b"house");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("HOUSE").unwrap().text(), "house");
        assert_eq!(Word::new("HoUsE").unwrap().text(), "house");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("lancet").unwrap().len(), 6);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("o'clock"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("jump-start"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cat "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("c4t"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_non_ascii() {
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
        assert_eq!(Word::new("naïve"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("horse").unwrap();
        assert_eq!(word.char_at(0), b'h');
        assert_eq!(word.char_at(2), b'r');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_lookup_by_str() {
        let mut map = FxHashMap::default();
        map.insert(Word::new("house").unwrap(), 7);
        assert_eq!(map.get("house"), Some(&7));
        assert_eq!(map.get("horse"), None);
    }

    #[test]
    fn word_display() {
        let word = Word::new("mouse").unwrap();
        assert_eq!(format!("{word}"), "mouse");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("house").unwrap();
        let word2 = Word::new("HOUSE").unwrap();
        let word3 = Word::new("horse").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
