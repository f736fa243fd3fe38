//! Word list loading utilities
//!
//! Provides functions to load raw word lists from files or use the embedded
//! list. Loaded lists are not filtered; see [`super::filter`].

use super::WORDS;
use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Name that selects the embedded list instead of a file path
pub const EMBEDDED_SOURCE: &str = "embedded";

/// Load a raw word list from a file
///
/// One entry per line. Blank lines and lines starting with `#` are skipped;
/// every other line is kept trimmed but otherwise untouched.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use morphology::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = parse_word_list(&content);
    info!(
        "Loaded {} raw words from {}",
        words.len(),
        path.as_ref().display()
    );
    Ok(words)
}

/// Parse raw word list text
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Convert an embedded string slice to an owned word list
///
/// # Examples
/// ```
/// use morphology::wordlists::loader::words_from_slice;
/// use morphology::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Load a word list by source name
///
/// `"embedded"` selects the compiled-in list; anything else is a file path.
///
/// # Errors
///
/// Returns an I/O error if a file source cannot be read.
pub fn load_source(source: &str) -> io::Result<Vec<String>> {
    if source == EMBEDDED_SOURCE {
        Ok(words_from_slice(WORDS))
    } else {
        load_from_file(source)
    }
}
