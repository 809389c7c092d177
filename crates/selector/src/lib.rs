//! # Parley Selector
//!
//! Picks a reply for an utterance from the statements in a [`StatementStore`].
//!
//! ## Matching
//!
//! ```text
//! input
//!   │
//!   ├──> exact prompt with linked responses?  ──yes──> those responses
//!   │
//!   ├──> best-scoring prompt above threshold? ──yes──> its responses
//!   │
//!   └──> fallback response
//!
//! responses ──> highest occurrence_count, earliest link on ties
//! ```
//!
//! Selection is a pure function of the input and the store contents. [`ChatBot`] adds
//! shared ownership of the store and the optional "learn the input" write, which
//! happens only after the reply has been chosen.

mod bot;
mod config;
mod error;
mod selector;

pub use bot::ChatBot;
pub use config::{BotConfig, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_FALLBACK_RESPONSE};
pub use error::{Result, SelectorError};
pub use parley_similarity::SimilarityStrategy;
pub use parley_store::StatementStore;
pub use selector::{MatchOrigin, ResponseSelector, Selection};
