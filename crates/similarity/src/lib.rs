//! # Parley Similarity
//!
//! Deterministic, symmetric similarity scores in `[0.0, 1.0]` between two utterances.
//!
//! ## Strategies
//!
//! - **Token overlap** (default) - Sørensen–Dice coefficient over normalized token sets
//! - **Levenshtein** - edit-distance ratio over the normalized text
//!
//! Both strategies share the same normalization: lowercase, split into words,
//! drop punctuation.
//!
//! ## Example
//!
//! ```
//! use parley_similarity::{Comparator, SimilarityStrategy};
//!
//! let comparator = Comparator::new(SimilarityStrategy::TokenOverlap);
//! assert_eq!(comparator.score("Hello, world!", "hello world"), 1.0);
//! assert_eq!(comparator.score("hello", "goodbye"), 0.0);
//! ```

mod levenshtein;
mod normalize;
mod strategy;

pub use levenshtein::levenshtein_distance;
pub use normalize::{normalize, tokenize};
pub use strategy::{Comparator, SimilarityStrategy};

/// Score two texts with the default strategy.
#[must_use]
pub fn score(a: &str, b: &str) -> f32 {
    Comparator::default().score(a, b)
}
