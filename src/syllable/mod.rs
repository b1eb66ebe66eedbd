//! Syllable counting: numerals, dictionary hyphenation and its corrections.

pub mod cascade;
mod counter;
mod numbers;
mod oracle;

pub use cascade::{CorrectionCascade, Pass, PASSES};
pub use counter::SyllableCounter;
pub use numbers::{german_number_syllables, NumberSyllables};
pub use oracle::{DictionaryOracle, IdentityOracle, SyllableOracle};
