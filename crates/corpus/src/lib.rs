//! # Parley Corpus
//!
//! Turns conversation corpora into statements and response links.
//!
//! ## Corpus layout
//!
//! A corpus is a list of conversations; each conversation is a list of turns, and every
//! turn is treated as a response to the one before it:
//!
//! ```yaml
//! categories:
//!   - greetings
//! conversations:
//!   - - Hello
//!     - Hi there!          # response to "Hello"
//!     - How are you?       # response to "Hi there!"
//! ```
//!
//! YAML and JSON files are accepted, either in the document form above or as a bare
//! list of conversations. A turn that is not a string fails the whole load.
//!
//! ## Example
//!
//! ```
//! use parley_corpus::{Corpus, CorpusLoader};
//! use parley_store::StatementStore;
//!
//! let corpus = Corpus::from_conversations(
//!     "greetings",
//!     vec![vec!["Good morning!".into(), "Good morning! How can I help you today?".into()]],
//! );
//! let mut store = StatementStore::new();
//! let stats = CorpusLoader::load(&mut store, &corpus);
//! assert_eq!(stats.links, 1);
//! ```

mod bundled;
mod corpus;
mod error;
mod loader;

pub use bundled::{bundled_corpora, BUNDLED_CORPUS_NAMES};
pub use corpus::{read_corpus_path, Corpus, CorpusFormat};
pub use error::{CorpusError, Result};
pub use loader::{CorpusLoader, LoadStats};
