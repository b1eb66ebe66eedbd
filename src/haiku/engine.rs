//! The haiku engine: normalization, counting and line layout.

use super::partition::partition_lines;
use crate::config::Config;
use crate::error::Result;
use crate::syllable::{DictionaryOracle, NumberSyllables, SyllableCounter, SyllableOracle};
use crate::text::Normalizer;
use std::fmt;

/// A text laid out as three lines of the configured syllable counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Haiku {
    lines: [String; 3],
}

impl Haiku {
    /// Returns the three lines.
    pub fn lines(&self) -> &[String; 3] {
        &self.lines
    }

    /// Returns the words of all lines in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().flat_map(|line| line.split(' '))
    }
}

impl fmt::Display for Haiku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.lines[0], self.lines[1], self.lines[2])
    }
}

/// Detects haiku in short texts.
///
/// The engine is immutable once built and can be shared between threads.
///
/// # Example
/// ```no_run
/// use haikufy::Haikufy;
///
/// let engine = Haikufy::german()?;
/// if let Some(haiku) = engine.haikufy("Ein alter Teich, ein Frosch springt hinein, das Geräusch des Wassers") {
///     println!("{}", haiku);
/// }
/// # Ok::<(), haikufy::HaikuError>(())
/// ```
pub struct Haikufy<O = DictionaryOracle> {
    config: Config,
    normalizer: Normalizer,
    counter: SyllableCounter<O>,
}

impl Haikufy<DictionaryOracle> {
    /// Creates an engine with the German defaults and dictionary.
    pub fn german() -> Result<Self> {
        Self::new(Config::default(), DictionaryOracle::german()?)
    }
}

impl<O: SyllableOracle> Haikufy<O> {
    /// Creates an engine, failing on an invalid configuration.
    pub fn new(config: Config, oracle: O) -> Result<Self> {
        config.validate()?;
        let normalizer = Normalizer::new(config.text.clone());
        let counter = SyllableCounter::new(&config.syllables, &config.corrections, oracle)?;
        Ok(Self {
            config,
            normalizer,
            counter,
        })
    }

    /// Replaces the numeral reader. `None` rejects every numeral.
    pub fn with_number_syllables(mut self, numbers: Option<NumberSyllables>) -> Self {
        self.counter = self.counter.with_number_syllables(numbers);
        self
    }

    /// Returns the configuration the engine was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Counts the syllables of a single word.
    pub fn count_syllables(&self, word: &str) -> Option<usize> {
        self.counter.count(word)
    }

    /// Normalizes `text` and counts every word.
    pub fn word_counts(&self, text: &str) -> Vec<(String, Option<usize>)> {
        self.normalizer
            .normalize_text(text)
            .into_iter()
            .map(|word| {
                let count = self.counter.count(&word);
                (word, count)
            })
            .collect()
    }

    /// Lays `text` out as a haiku, or returns `None` if it is not one.
    pub fn haikufy(&self, text: &str) -> Option<Haiku> {
        let words = self.normalizer.normalize_text(text);
        if words.is_empty() {
            return None;
        }

        let counts: Option<Vec<usize>> = words.iter().map(|w| self.counter.count(w)).collect();
        let Some(counts) = counts else {
            log::debug!("Unparseable word in {:?}", words);
            return None;
        };
        log::debug!("{:?} {:?}", words, counts);

        let total: usize = counts.iter().sum();
        let expected = self.config.haiku.total_syllables();
        if total != expected {
            log::debug!("{} syllables, expected {}", total, expected);
            return None;
        }

        let sizes = partition_lines(&counts, &self.config.haiku.line_syllables)?;
        let mut words = words.into_iter();
        let lines = sizes.map(|size| words.by_ref().take(size).collect::<Vec<_>>().join(" "));
        Some(Haiku { lines })
    }
}
