//! Move check command
//!
//! Explains whether one word may follow another in a chain.

use crate::core::hamming_distance;
use crate::error::MoveError;
use crate::game::check_move;
use crate::wordlists::Dictionary;

/// Result of checking a single move
pub struct CheckResult {
    pub previous: String,
    pub candidate: String,
    /// Differing positions; `None` for words of different lengths
    pub distance: Option<usize>,
    pub in_dictionary: bool,
    pub verdict: Result<(), MoveError>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// Check a move against the dictionary
#[must_use]
pub fn check_words(previous: &str, candidate: &str, dictionary: &Dictionary) -> CheckResult {
    let previous = previous.trim().to_lowercase();
    let candidate = candidate.trim().to_lowercase();

    CheckResult {
        distance: hamming_distance(&previous, &candidate),
        in_dictionary: dictionary.contains(&candidate),
        verdict: check_move(&candidate, &previous, dictionary),
        previous,
        candidate,
    }
}
