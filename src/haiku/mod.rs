//! Haiku detection and line layout.

mod engine;
mod partition;

pub use engine::{Haiku, Haikufy};
pub use partition::partition_lines;
