//! The `CaseStore` trait.
//!
//! Implemented by storage backends (e.g. `sherlock-store-memory`). The GraphQL
//! resolvers depend on this abstraction, never on a concrete backend, and hold
//! it as `Arc<dyn CaseStore>`.

use crate::{
  Result,
  case::{Case, CaseId, CasePatch, NewCase},
};

/// Abstraction over the holder of all case records.
///
/// Every method is a bounded, synchronous operation. Implementations must
/// serialise access themselves: the trait takes `&self` and is shared across
/// request tasks.
///
/// "Not found" is never an error. Lookups and mutations that match no record
/// return `Ok(None)`; `Err` is reserved for infrastructure failures.
pub trait CaseStore: Send + Sync {
  /// Return the case with `id`, if any.
  fn find_by_id(&self, id: CaseId) -> Result<Option<Case>>;

  /// Return every case in insertion order.
  fn list(&self) -> Result<Vec<Case>>;

  /// Number of cases currently held.
  fn len(&self) -> Result<usize>;

  fn is_empty(&self) -> Result<bool> { Ok(self.len()? == 0) }

  /// Store a new case under a fresh id and return it.
  ///
  /// The id is distinct from every id the store has ever held, including
  /// removed ones.
  fn append(&self, input: NewCase) -> Result<Case>;

  /// Store `case` under its own id.
  ///
  /// Used for seeding. Returns [`Error::DuplicateId`](crate::Error::DuplicateId)
  /// if the id is already taken.
  fn insert(&self, case: Case) -> Result<Case>;

  /// Apply `patch` to the case with `id` and return the updated record.
  /// An empty patch returns the record unchanged.
  fn update_fields(&self, id: CaseId, patch: CasePatch) -> Result<Option<Case>>;

  /// Take the case with `id` out of the collection and return it.
  fn remove(&self, id: CaseId) -> Result<Option<Case>>;
}
