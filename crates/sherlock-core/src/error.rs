//! Error types for `sherlock-core`.

use thiserror::Error;

use crate::case::CaseId;

/// Infrastructure failures of a [`CaseStore`](crate::store::CaseStore).
///
/// A missing record is not an error; lookups and mutations report it as
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum Error {
  #[error("case id {0} is already taken")]
  DuplicateId(CaseId),

  #[error("case id space exhausted")]
  IdSpaceExhausted,

  #[error("case store lock poisoned")]
  LockPoisoned,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
