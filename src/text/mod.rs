//! Text processing module for normalization and tokenization.

mod normalizer;

pub use normalizer::Normalizer;
