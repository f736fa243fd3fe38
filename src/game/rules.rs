//! Move validation
//!
//! A move replaces exactly one letter of the previous word and must land on a
//! dictionary word. Comparison is case-insensitive.

use crate::core::differs_by_one_letter;
use crate::error::MoveError;
use crate::wordlists::Dictionary;

/// Check whether `candidate` is a legal move from `previous`
///
/// True iff the candidate is in the dictionary and both words have equal
/// length and differ at exactly one position. Never fails; mismatched
/// lengths simply yield `false`.
///
/// # Examples
/// ```
/// use morphology::game::is_valid_move;
/// use morphology::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(&["house", "horse", "hoarse"]);
/// assert!(is_valid_move("horse", "house", &dictionary));
/// assert!(!is_valid_move("hoarse", "house", &dictionary));
/// ```
#[must_use]
pub fn is_valid_move(candidate: &str, previous: &str, dictionary: &Dictionary) -> bool {
    check_move(candidate, previous, dictionary).is_ok()
}

/// Like [`is_valid_move`], but says why a move is rejected
///
/// Dictionary membership is checked first.
///
/// # Errors
///
/// - [`MoveError::NotAWord`] if the candidate is not in the dictionary
/// - [`MoveError::NotOneLetterApart`] if the words differ in length or in
///   anything other than exactly one letter
pub fn check_move(
    candidate: &str,
    previous: &str,
    dictionary: &Dictionary,
) -> Result<(), MoveError> {
    let candidate = candidate.trim().to_lowercase();
    let previous = previous.trim().to_lowercase();

    if !dictionary.contains(&candidate) {
        return Err(MoveError::NotAWord(candidate));
    }

    if !differs_by_one_letter(&candidate, &previous) {
        return Err(MoveError::NotOneLetterApart {
            previous,
            candidate,
        });
    }

    Ok(())
}
