//! Error types for the haikufy engine.
//!
//! Evaluating a text never fails: "not a haiku" is an ordinary `None`.
//! These errors only come out of construction and configuration loading.

use thiserror::Error;

/// The main error type for haikufy operations.
#[derive(Error, Debug)]
pub enum HaikuError {
    /// Invalid configuration table or character set.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The abbreviation pattern does not compile.
    #[error("Invalid abbreviation pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Hyphenation patterns could not be loaded.
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for haikufy operations.
pub type Result<T> = std::result::Result<T, HaikuError>;
