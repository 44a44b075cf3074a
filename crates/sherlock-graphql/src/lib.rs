//! GraphQL schema and query executor for the Sherlock case service.
//!
//! Parsing and validation are handled by [`async_graphql`]; this crate binds
//! the fixed set of operations to a [`sherlock_core::CaseStore`] and turns the
//! outcome into a transport-agnostic [`ExecutionResult`].
//!
//! ```rust,ignore
//! let executor = Executor::new(Arc::new(MemoryStore::seeded()));
//! let result = executor.execute("{ case(id: 1) { name } }").await;
//! ```

pub mod executor;
pub mod schema;

pub use executor::{ErrorLocation, ExecutionError, ExecutionResult, Executor, QueryRequest};
pub use schema::{CaseNode, CaseSchema, MutationRoot, QueryRoot, build_schema};

#[cfg(test)]
mod tests;
