// File: src/config.rs
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Weights and thresholds used by the ranking engine.
/// Every field falls back to its default when missing from the TOML file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankingConfig {
    /// Normalized phrase starts with the whole normalized query.
    #[serde(default = "default_prefix_weight")]
    pub prefix_weight: u32,
    /// Normalized phrase contains the whole normalized query.
    #[serde(default = "default_substring_weight")]
    pub substring_weight: u32,
    /// A phrase word starts with a query word (once per query word).
    #[serde(default = "default_word_prefix_weight")]
    pub word_prefix_weight: u32,
    /// The phrase contains a query word anywhere.
    #[serde(default = "default_word_contains_weight")]
    pub word_contains_weight: u32,
    /// Multiplier for the similarity of each close-enough phrase word.
    #[serde(default = "default_fuzzy_weight")]
    pub fuzzy_weight: u32,
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
    /// Trimmed queries shorter than this return nothing.
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
    #[serde(default = "default_min_query_word_chars")]
    pub min_query_word_chars: usize,
    #[serde(default = "default_min_fuzzy_word_chars")]
    pub min_fuzzy_word_chars: usize,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Generic fallbacks pad the result up to this many entries.
    #[serde(default = "default_generic_floor")]
    pub generic_floor: usize,
}

fn default_prefix_weight() -> u32 {
    1000
}

fn default_substring_weight() -> u32 {
    500
}

fn default_word_prefix_weight() -> u32 {
    200
}

fn default_word_contains_weight() -> u32 {
    100
}

fn default_fuzzy_weight() -> u32 {
    80
}

fn default_fuzzy_threshold() -> f64 {
    0.6
}

fn default_min_query_chars() -> usize {
    2
}

fn default_min_query_word_chars() -> usize {
    2
}

fn default_min_fuzzy_word_chars() -> usize {
    3
}

fn default_limit() -> usize {
    8
}

fn default_generic_floor() -> usize {
    2
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            prefix_weight: default_prefix_weight(),
            substring_weight: default_substring_weight(),
            word_prefix_weight: default_word_prefix_weight(),
            word_contains_weight: default_word_contains_weight(),
            fuzzy_weight: default_fuzzy_weight(),
            fuzzy_threshold: default_fuzzy_threshold(),
            min_query_chars: default_min_query_chars(),
            min_query_word_chars: default_min_query_word_chars(),
            min_fuzzy_word_chars: default_min_fuzzy_word_chars(),
            default_limit: default_limit(),
            generic_floor: default_generic_floor(),
        }
    }
}

impl RankingConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: RankingConfig =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        log::debug!("Loaded ranking config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(ConfigError::Invalid(format!(
                "fuzzy_threshold must be within 0.0..=1.0, got {}",
                self.fuzzy_threshold
            )));
        }
        if self.min_query_chars == 0 {
            return Err(ConfigError::Invalid(
                "min_query_chars must be at least 1".to_string(),
            ));
        }
        // One query word hitting every tier must still fit in a u32 score.
        let single_word_max = [
            self.substring_weight,
            self.word_prefix_weight,
            self.word_contains_weight,
            self.fuzzy_weight,
        ]
        .iter()
        .try_fold(self.prefix_weight, |total, &w| total.checked_add(w));
        if single_word_max.is_none() {
            return Err(ConfigError::Invalid(
                "weights are too large: their sum overflows a u32 score".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: RankingConfig = toml::from_str("").unwrap();
        assert_eq!(config, RankingConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: RankingConfig = toml::from_str("fuzzy_threshold = 0.75\ndefault_limit = 5").unwrap();
        assert_eq!(config.fuzzy_threshold, 0.75);
        assert_eq!(config.default_limit, 5);
        assert_eq!(config.prefix_weight, 1000);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let config = RankingConfig {
            fuzzy_threshold: 1.5,
            ..RankingConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_overflowing_weights() {
        let config = RankingConfig {
            prefix_weight: u32::MAX,
            ..RankingConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = RankingConfig {
            prefix_weight: u32::MAX - 880,
            ..RankingConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_min_query() {
        let config = RankingConfig {
            min_query_chars: 0,
            ..RankingConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
