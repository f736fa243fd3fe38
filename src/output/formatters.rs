//! Formatting utilities for terminal output

use crate::core::Word;

/// Format a word chain as `CAT → COT → COG`
#[must_use]
pub fn format_chain(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// "1 move", "3 moves"
#[must_use]
pub fn moves_label(moves: usize) -> String {
    if moves == 1 {
        "1 move".to_string()
    } else {
        format!("{moves} moves")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn chain_formatting() {
        assert_eq!(format_chain(&words(&["cat", "cot", "cog"])), "CAT → COT → COG");
        assert_eq!(format_chain(&words(&["cat"])), "CAT");
        assert_eq!(format_chain(&[]), "");
    }

    #[test]
    fn moves_label_pluralizes() {
        assert_eq!(moves_label(0), "0 moves");
        assert_eq!(moves_label(1), "1 move");
        assert_eq!(moves_label(4), "4 moves");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
