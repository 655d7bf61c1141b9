//! Department — the entity employees point at.
//!
//! The core only ever reads departments. They are written by whoever owns
//! the collection (the server seeds them from configuration).

use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
  pub id:   RecordId,
  pub name: String,
}

/// Insert payload for [`Department`]. The id may be chosen by the caller; see
/// [`Record::requested_id`] for what that means for reuse.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDepartment {
  pub id:   Option<RecordId>,
  pub name: String,
}

impl NewDepartment {
  pub fn with_id(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
    Self { id: Some(id.into()), name: name.into() }
  }
}

#[derive(Debug, Clone, Default)]
pub struct DepartmentPatch {
  pub name: Option<String>,
}

impl Record for Department {
  type New = NewDepartment;
  type Patch = DepartmentPatch;

  const COLLECTION: &'static str = "departments";

  fn id(&self) -> &RecordId { &self.id }

  fn requested_id(new: &NewDepartment) -> Option<RecordId> { new.id.clone() }

  fn assemble(id: RecordId, new: NewDepartment) -> Self {
    Self { id, name: new.name }
  }

  fn apply(&mut self, patch: DepartmentPatch) {
    if let Some(name) = patch.name {
      self.name = name;
    }
  }
}
