//! Letter-difference measures between words
//!
//! Two words are adjacent in the game when they have the same length and
//! differ at exactly one position.

/// Count the positions at which two strings differ
///
/// Returns `None` when the strings have different lengths (in characters),
/// since the distance is only defined for equal-length strings.
///
/// # Examples
/// ```
/// use morphology::core::hamming_distance;
///
/// assert_eq!(hamming_distance("house", "horse"), Some(1));
/// assert_eq!(hamming_distance("house", "house"), Some(0));
/// assert_eq!(hamming_distance("house", "hoarse"), None);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    let mut left = a.chars();
    let mut right = b.chars();
    let mut distance = 0;

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    distance += 1;
                }
            }
            (None, None) => return Some(distance),
            _ => return None,
        }
    }
}

/// Check whether two strings have equal length and differ in exactly one position
#[inline]
#[must_use]
pub fn differs_by_one_letter(a: &str, b: &str) -> bool {
    hamming_distance(a, b) == Some(1)
}

/// Byte-level adjacency test used on the graph-building hot path
///
/// Stops scanning as soon as a second difference is found.
#[inline]
#[must_use]
pub fn is_one_apart(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut differences = 0;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            differences += 1;
            if differences > 1 {
                return false;
            }
        }
    }

    differences == 1
}
