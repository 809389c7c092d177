//! # Parley Store
//!
//! Known statements and the directed "in response to" links between them.
//!
//! ## Architecture
//!
//! ```text
//! add_statement(text) ──> Statement { text, occurrence_count }
//!                              │
//! add_response_link(r, p) ──> ResponseLink { r ─in_response_to─> p }
//!                              │
//!                              ├──> get_response_candidates(p)  (link insertion order)
//!                              ├──> all_statements()            (statement insertion order)
//!                              └──> save / load                 (JSON snapshot)
//! ```
//!
//! The store itself is single-owner (`&mut self` for writes). Callers that serve
//! concurrent requests wrap it in a reader/writer lock.

mod error;
mod snapshot;
mod store;
mod types;

pub use error::{Result, StoreError};
pub use snapshot::STORE_SCHEMA_VERSION;
pub use store::StatementStore;
pub use types::{ResponseLink, Statement};
