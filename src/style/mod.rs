//! Utility-class style engine: tokenizer, per-axis resolvers, entry point.

pub mod tokenizer;
pub mod error;
pub mod axis;
pub mod sizing;
pub mod color;
pub mod radius;
pub mod resolver;

pub use error::StyleError;
pub use resolver::{tailwind, ResolvedStyle, StyleContext};
