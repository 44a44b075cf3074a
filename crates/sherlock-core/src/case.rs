//! The case record and its create/update inputs.

use serde::{Deserialize, Serialize};

/// Identifier of a case. Assigned by the store, never changed afterwards.
pub type CaseId = i64;

/// A single case in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
  pub id:       CaseId,
  pub name:     String,
  /// Free-form date or period label, e.g. `"March 1881"`.
  pub time:     String,
  pub location: String,
}

/// Input for [`CaseStore::append`](crate::store::CaseStore::append). The id
/// is chosen by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCase {
  pub name:     String,
  pub time:     String,
  pub location: String,
}

impl NewCase {
  pub fn new(
    name: impl Into<String>,
    time: impl Into<String>,
    location: impl Into<String>,
  ) -> Self {
    Self {
      name:     name.into(),
      time:     time.into(),
      location: location.into(),
    }
  }

  /// Attach `id` to produce a full record.
  pub fn with_id(self, id: CaseId) -> Case {
    Case {
      id,
      name: self.name,
      time: self.time,
      location: self.location,
    }
  }
}

/// A partial update. Only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasePatch {
  pub name:     Option<String>,
  pub time:     Option<String>,
  pub location: Option<String>,
}

impl CasePatch {
  /// `true` when no field is supplied, i.e. applying it changes nothing.
  pub fn is_empty(&self) -> bool {
    self.name.is_none() && self.time.is_none() && self.location.is_none()
  }

  /// Overwrite the supplied fields of `case`, leaving the rest untouched.
  pub fn apply(self, case: &mut Case) {
    if let Some(name) = self.name {
      case.name = name;
    }
    if let Some(time) = self.time {
      case.time = time;
    }
    if let Some(location) = self.location {
      case.location = location;
    }
  }
}
