//! # Haikufy - German Haiku Detection
//!
//! Haikufy checks whether a short text, such as a reply on a social network,
//! happens to be a German haiku of 5, 7 and 5 syllables, and if so lays its
//! words out in three lines. Words are never changed or reordered, only
//! grouped.
//!
//! ## Overview
//!
//! Each word is counted on its own. Emoticons and punctuation count zero,
//! numerals are read out in German, consonant-only abbreviations are spelled
//! letter by letter, and loan words come from an override table. Everything
//! else is hyphenated with a German pattern dictionary, whose output is then
//! repaired by a cascade of phonotactic corrections.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use haikufy::Haikufy;
//!
//! let engine = Haikufy::german()?;
//! match engine.haikufy("Ich sitze im Zug und schaue hinaus auf das Land draußen") {
//!     Some(haiku) => println!("{}", haiku),
//!     None => println!("Not a haiku!"),
//! }
//! # Ok::<(), haikufy::HaikuError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Substitutions and tokenization
//! - [`syllable`] - Numerals, dictionary hyphenation and corrections
//! - [`haiku`] - The engine and the line partitioner
//! - [`config`] - Tables and character sets, loadable from JSON

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod haiku;
pub mod syllable;
pub mod text;

// Re-export commonly used types
pub use config::{Config, CorrectionTables, HaikuConfig, SyllableConfig, TextConfig};
pub use error::{HaikuError, Result};
pub use haiku::{partition_lines, Haiku, Haikufy};
pub use syllable::{
    german_number_syllables, CorrectionCascade, DictionaryOracle, IdentityOracle,
    NumberSyllables, SyllableCounter, SyllableOracle,
};
pub use text::Normalizer;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
