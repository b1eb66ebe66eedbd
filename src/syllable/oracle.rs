//! Dictionary hyphenation used as the baseline segmentation of a word.

use crate::error::{HaikuError, Result};
use hyphenation::{Hyphenator, Language, Load, Standard};

/// A source of baseline syllable segmentations.
///
/// Implementations receive a lowercase word and return its syllables in
/// order. They must be deterministic and free of side effects, since the
/// engine is shared between threads.
pub trait SyllableOracle: Send + Sync {
    /// Splits a lowercase word into syllables.
    fn syllables(&self, word: &str) -> Vec<String>;
}

impl<F> SyllableOracle for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn syllables(&self, word: &str) -> Vec<String> {
        self(word)
    }
}

/// Liang-pattern hyphenation with the embedded German (1996) dictionary.
pub struct DictionaryOracle {
    dictionary: Standard,
}

impl DictionaryOracle {
    /// Loads the German dictionary with a one-letter margin at both edges.
    pub fn german() -> Result<Self> {
        Self::load(Language::German1996)
    }

    /// Loads the embedded dictionary for `language`.
    pub fn load(language: Language) -> Result<Self> {
        let mut dictionary = Standard::from_embedded(language)
            .map_err(|err| HaikuError::Dictionary(err.to_string()))?;
        dictionary.minima = (1, 1);
        log::debug!("Loaded hyphenation patterns for {:?}", language);
        Ok(Self { dictionary })
    }
}

impl SyllableOracle for DictionaryOracle {
    fn syllables(&self, word: &str) -> Vec<String> {
        let hyphenated = self.dictionary.hyphenate(word);
        split_at_breaks(word, &hyphenated.breaks)
    }
}

/// Treats every word as a single syllable, leaving all splitting to the
/// correction cascade.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityOracle;

impl SyllableOracle for IdentityOracle {
    fn syllables(&self, word: &str) -> Vec<String> {
        vec![word.to_string()]
    }
}

/// Cuts `word` at the given byte offsets, dropping empty pieces.
fn split_at_breaks(word: &str, breaks: &[usize]) -> Vec<String> {
    let mut pieces = Vec::with_capacity(breaks.len() + 1);
    let mut start = 0;
    for &end in breaks {
        if end <= start || end >= word.len() || !word.is_char_boundary(end) {
            continue;
        }
        pieces.push(word[start..end].to_string());
        start = end;
    }
    if start < word.len() {
        pieces.push(word[start..].to_string());
    }
    pieces
}
