//! Text normalization ahead of syllable counting.

use crate::config::TextConfig;
use unicode_normalization::UnicodeNormalization;

/// Text normalizer that applies literal substitutions and splits on whitespace.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: TextConfig,
}

impl Normalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Applies the substitution table, in order, to the whole text.
    pub fn substitute(&self, text: &str) -> String {
        let mut result = if self.config.compose_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        };

        for (from, to) in &self.config.substitutions {
            if !from.is_empty() && result.contains(from.as_str()) {
                result = result.replace(from.as_str(), to);
            }
        }

        result
    }

    /// Normalizes text and returns its words in source order.
    pub fn normalize_text(&self, text: &str) -> Vec<String> {
        self.substitute(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}
