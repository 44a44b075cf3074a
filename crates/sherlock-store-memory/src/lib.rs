//! In-memory backend for the Sherlock case store.
//!
//! The whole collection lives in a `Vec` behind a single mutex. Nothing is
//! persisted; the data is lost when the process exits.

mod seed;
mod store;

pub use seed::seed_cases;
pub use store::MemoryStore;
