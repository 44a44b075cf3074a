//! [`MemoryStore`] — the in-memory implementation of [`CaseStore`].

use std::sync::{Mutex, MutexGuard};

use sherlock_core::{
  Case, CaseId, CasePatch, CaseStore, Error, NewCase, Result,
};

use crate::seed::seed_cases;

// ─── State ───────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct Cases {
  /// Insertion-ordered. Lookups are linear scans; the collection is small.
  records: Vec<Case>,
  /// Next id handed out by `append`. `None` once `CaseId::MAX` was used.
  next_id: Option<CaseId>,
}

impl Cases {
  fn position(&self, id: CaseId) -> Option<usize> {
    self.records.iter().position(|c| c.id == id)
  }

  /// Keep `next_id` strictly above every id ever stored.
  fn reserve(&mut self, id: CaseId) {
    let Some(next) = self.next_id else { return };
    if id >= next {
      self.next_id = id.checked_add(1);
    }
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A case store held entirely in memory.
///
/// All operations take the same lock for their full duration, so concurrent
/// callers observe them in some serial order.
#[derive(Debug)]
pub struct MemoryStore {
  cases: Mutex<Cases>,
}

impl Default for MemoryStore {
  fn default() -> Self { Self::new() }
}

impl MemoryStore {
  /// An empty store. The first appended case gets id 1.
  pub fn new() -> Self {
    Self {
      cases: Mutex::new(Cases {
        records: Vec::new(),
        next_id: Some(1),
      }),
    }
  }

  /// A store holding the two stock cases (ids 1 and 2).
  pub fn seeded() -> Self {
    let records = seed_cases();
    let next_id = records
      .iter()
      .map(|c| c.id)
      .max()
      .map_or(Some(1), |max| max.checked_add(1));
    Self {
      cases: Mutex::new(Cases { records, next_id }),
    }
  }

  /// A store holding `cases` in the given order.
  ///
  /// Fails with [`Error::DuplicateId`] if two of them share an id.
  pub fn with_cases(cases: impl IntoIterator<Item = Case>) -> Result<Self> {
    let store = Self::new();
    for case in cases {
      store.insert(case)?;
    }
    Ok(store)
  }

  fn lock(&self) -> Result<MutexGuard<'_, Cases>> {
    self.cases.lock().map_err(|_| Error::LockPoisoned)
  }
}

impl CaseStore for MemoryStore {
  fn find_by_id(&self, id: CaseId) -> Result<Option<Case>> {
    let cases = self.lock()?;
    Ok(cases.records.iter().find(|c| c.id == id).cloned())
  }

  fn list(&self) -> Result<Vec<Case>> { Ok(self.lock()?.records.clone()) }

  fn len(&self) -> Result<usize> { Ok(self.lock()?.records.len()) }

  fn append(&self, input: NewCase) -> Result<Case> {
    let mut cases = self.lock()?;
    let id = cases.next_id.ok_or(Error::IdSpaceExhausted)?;
    let case = input.with_id(id);
    cases.reserve(id);
    cases.records.push(case.clone());
    tracing::debug!(id, "appended case");
    Ok(case)
  }

  fn insert(&self, case: Case) -> Result<Case> {
    let mut cases = self.lock()?;
    if cases.position(case.id).is_some() {
      return Err(Error::DuplicateId(case.id));
    }
    cases.reserve(case.id);
    cases.records.push(case.clone());
    tracing::debug!(id = case.id, "inserted case");
    Ok(case)
  }

  fn update_fields(&self, id: CaseId, patch: CasePatch) -> Result<Option<Case>> {
    let mut cases = self.lock()?;
    let Some(index) = cases.position(id) else {
      tracing::debug!(id, "update matched no case");
      return Ok(None);
    };
    let case = &mut cases.records[index];
    patch.apply(case);
    Ok(Some(case.clone()))
  }

  fn remove(&self, id: CaseId) -> Result<Option<Case>> {
    let mut cases = self.lock()?;
    let removed = cases.position(id).map(|index| cases.records.remove(index));
    if removed.is_none() {
      tracing::debug!(id, "remove matched no case");
    }
    Ok(removed)
  }
}
