//! Core types and the store trait for the Sherlock case service.
//!
//! This crate is free of HTTP, GraphQL and storage dependencies. The schema,
//! store backend and server crates all depend on it.

pub mod case;
pub mod error;
pub mod store;

pub use case::{Case, CaseId, CasePatch, NewCase};
pub use error::{Error, Result};
pub use store::CaseStore;
