//! Game configuration
//!
//! One value carries every knob that shapes the word set and the puzzles:
//! word length, step range, plural exclusion, attempt cap and graph builder.

use crate::error::ConfigError;
use crate::graph::GraphBuilder;
use crate::puzzle::generator::DEFAULT_MAX_ATTEMPTS;
use crate::wordlists::FilterConfig;

/// Settings for building the game words and generating puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word
    pub word_length: usize,
    /// Fewest moves a puzzle's shortest solution may take
    pub min_steps: usize,
    /// Most moves a puzzle's shortest solution may take
    pub max_steps: usize,
    /// Suffix excluded from candidates (plural "s" by default)
    pub exclude_suffix: Option<String>,
    /// Pairs sampled before generation gives up
    pub max_attempts: usize,
    /// Graph construction algorithm
    pub graph_builder: GraphBuilder,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            min_steps: 2,
            max_steps: 5,
            exclude_suffix: Some("s".to_string()),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            graph_builder: GraphBuilder::default(),
        }
    }
}

impl GameConfig {
    /// Check that every value is usable
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a zero word length, a step range that is
    /// not `1 <= min <= max`, or a zero attempt cap.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.min_steps == 0 || self.min_steps > self.max_steps {
            return Err(ConfigError::InvalidStepRange {
                min_steps: self.min_steps,
                max_steps: self.max_steps,
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }

    /// Candidate filter derived from the word length and suffix
    #[must_use]
    pub fn filter(&self) -> FilterConfig {
        let filter = FilterConfig::new(self.word_length);
        match &self.exclude_suffix {
            Some(suffix) => filter.excluding_suffix(suffix.clone()),
            None => filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_observed_game() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.min_steps, 2);
        assert_eq!(config.max_steps, 5);
        assert_eq!(config.exclude_suffix.as_deref(), Some("s"));
        assert_eq!(config.max_attempts, 10_000);
        assert_eq!(config.graph_builder, GraphBuilder::Pairwise);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let zero_length = GameConfig {
            word_length: 0,
            ..GameConfig::default()
        };
        assert_eq!(zero_length.validate(), Err(ConfigError::ZeroWordLength));

        let zero_min = GameConfig {
            min_steps: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            zero_min.validate(),
            Err(ConfigError::InvalidStepRange { .. })
        ));

        let inverted = GameConfig {
            min_steps: 4,
            max_steps: 3,
            ..GameConfig::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(ConfigError::InvalidStepRange {
                min_steps: 4,
                max_steps: 3
            })
        );

        let no_attempts = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        assert_eq!(no_attempts.validate(), Err(ConfigError::ZeroAttempts));
    }

    #[test]
    fn filter_follows_config() {
        let config = GameConfig::default();
        let filter = config.filter();
        assert!(filter.accepts("house"));
        assert!(!filter.accepts("homes"));
        assert!(!filter.accepts("cat"));

        let keep_plurals = GameConfig {
            exclude_suffix: None,
            ..config
        };
        assert!(keep_plurals.filter().accepts("homes"));
    }
}
