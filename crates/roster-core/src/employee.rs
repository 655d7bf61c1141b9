//! Employee types: the stored record, its write payloads, and the resolved
//! read model.

use serde::{Deserialize, Serialize};

use crate::{
  department::Department,
  record::{Record, RecordId},
};

// ─── Stored record ───────────────────────────────────────────────────────────

/// An employee as persisted. `department` is a raw reference, never an
/// embedded copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id:         RecordId,
  pub first_name: String,
  pub last_name:  String,
  pub department: RecordId,
}

// ─── Write payloads ──────────────────────────────────────────────────────────

/// A validated creation payload. Obtain one through
/// [`EmployeeDraft::into_new_employee`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
  pub first_name: String,
  pub last_name:  String,
  pub department: RecordId,
}

/// A validated partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub department: Option<RecordId>,
}

/// An unvalidated candidate as it arrives from a caller.
///
/// Every field is an arbitrary JSON value so that a missing field and a
/// field of the wrong type can both be reported. JSON `null` deserialises to
/// `None` and counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
  #[serde(default)]
  pub first_name: Option<serde_json::Value>,
  #[serde(default)]
  pub last_name:  Option<serde_json::Value>,
  #[serde(default)]
  pub department: Option<serde_json::Value>,
}

impl EmployeeDraft {
  /// Convenience constructor for a well-typed candidate.
  pub fn new(
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    department: impl Into<String>,
  ) -> Self {
    Self {
      first_name: Some(serde_json::Value::String(first_name.into())),
      last_name:  Some(serde_json::Value::String(last_name.into())),
      department: Some(serde_json::Value::String(department.into())),
    }
  }
}

impl Record for Employee {
  type New = NewEmployee;
  type Patch = EmployeePatch;

  const COLLECTION: &'static str = "employees";

  fn id(&self) -> &RecordId { &self.id }

  fn assemble(id: RecordId, new: NewEmployee) -> Self {
    Self {
      id,
      first_name: new.first_name,
      last_name: new.last_name,
      department: new.department,
    }
  }

  fn apply(&mut self, patch: EmployeePatch) {
    if let Some(first_name) = patch.first_name {
      self.first_name = first_name;
    }
    if let Some(last_name) = patch.last_name {
      self.last_name = last_name;
    }
    if let Some(department) = patch.department {
      self.department = department;
    }
  }
}

// ─── Read model ──────────────────────────────────────────────────────────────

/// An employee with its department reference followed.
///
/// `department` is `None` when the reference dangles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEmployee {
  pub id:         RecordId,
  pub first_name: String,
  pub last_name:  String,
  pub department: Option<Department>,
}

impl ResolvedEmployee {
  pub fn new(employee: Employee, department: Option<Department>) -> Self {
    Self {
      id: employee.id,
      first_name: employee.first_name,
      last_name: employee.last_name,
      department,
    }
  }
}
