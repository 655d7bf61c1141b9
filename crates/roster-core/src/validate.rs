//! Field validation for employee candidates.
//!
//! Validation is a pure function of the candidate: no store access, no side
//! effects. The same per-field rules back creation and update.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
  employee::{EmployeeDraft, EmployeePatch, NewEmployee},
  record::RecordId,
};

// ─── Error types ─────────────────────────────────────────────────────────────

/// A validated employee field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
  FirstName,
  LastName,
  Department,
}

impl Field {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::FirstName => "firstName",
      Self::LastName => "lastName",
      Self::Department => "department",
    }
  }

  /// Whether an empty string is rejected for this field.
  fn requires_content(self) -> bool {
    matches!(self, Self::FirstName | Self::LastName)
  }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
  Missing,
  NotText,
  Empty,
}

impl fmt::Display for Reason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Missing => "is required",
      Self::NotText => "must be a string",
      Self::Empty => "must not be empty",
    })
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
  pub field:  Field,
  pub reason: Reason,
}

impl fmt::Display for FieldError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.field.as_str(), self.reason)
  }
}

/// A non-empty list of field errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
  pub fn fields(&self) -> &[FieldError] { &self.0 }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, e) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str("; ")?;
      }
      write!(f, "{e}")?;
    }
    Ok(())
  }
}

impl std::error::Error for ValidationErrors {}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// Check a single field value. `None` means the field was absent.
fn check(field: Field, value: Option<&Value>) -> Option<FieldError> {
  let reason = match value {
    None => Reason::Missing,
    Some(Value::String(s)) if s.is_empty() && field.requires_content() => {
      Reason::Empty
    }
    Some(Value::String(_)) => return None,
    Some(_) => Reason::NotText,
  };
  Some(FieldError { field, reason })
}

fn fields(draft: &EmployeeDraft) -> [(Field, Option<&Value>); 3] {
  [
    (Field::FirstName, draft.first_name.as_ref()),
    (Field::LastName, draft.last_name.as_ref()),
    (Field::Department, draft.department.as_ref()),
  ]
}

/// Validate a candidate for creation (or a full-field update). Every field
/// is required. An empty result means the candidate may be persisted.
pub fn validate(draft: &EmployeeDraft) -> Vec<FieldError> {
  fields(draft)
    .into_iter()
    .filter_map(|(field, value)| check(field, value))
    .collect()
}

/// Validate a partial candidate: absent fields are skipped, present fields
/// follow the same rules as [`validate`].
pub fn validate_patch(draft: &EmployeeDraft) -> Vec<FieldError> {
  fields(draft)
    .into_iter()
    .filter(|(_, value)| value.is_some())
    .filter_map(|(field, value)| check(field, value))
    .collect()
}

fn text(value: Option<Value>) -> Option<String> {
  match value {
    Some(Value::String(s)) => Some(s),
    _ => None,
  }
}

impl EmployeeDraft {
  /// Validate and convert into a creation payload.
  pub fn into_new_employee(self) -> Result<NewEmployee, ValidationErrors> {
    let errors = validate(&self);
    match (
      text(self.first_name),
      text(self.last_name),
      text(self.department),
    ) {
      (Some(first_name), Some(last_name), Some(department))
        if errors.is_empty() =>
      {
        Ok(NewEmployee {
          first_name,
          last_name,
          department: RecordId::from(department),
        })
      }
      _ => Err(ValidationErrors(errors)),
    }
  }

  /// Validate and convert into a partial update.
  pub fn into_patch(self) -> Result<EmployeePatch, ValidationErrors> {
    let errors = validate_patch(&self);
    if !errors.is_empty() {
      return Err(ValidationErrors(errors));
    }
    Ok(EmployeePatch {
      first_name: text(self.first_name),
      last_name:  text(self.last_name),
      department: text(self.department).map(RecordId::from),
    })
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn draft(value: Value) -> EmployeeDraft {
    serde_json::from_value(value).expect("draft json")
  }

  fn reasons(errors: &[FieldError]) -> Vec<(Field, Reason)> {
    errors.iter().map(|e| (e.field, e.reason)).collect()
  }

  #[test]
  fn empty_candidate_has_one_error_per_field() {
    let errors = validate(&draft(json!({})));
    assert_eq!(reasons(&errors), vec![
      (Field::FirstName, Reason::Missing),
      (Field::LastName, Reason::Missing),
      (Field::Department, Reason::Missing),
    ]);
  }

  #[test]
  fn partially_filled_candidates_report_the_gaps() {
    let errors = validate(&draft(json!({ "firstName": "Anna" })));
    assert_eq!(reasons(&errors), vec![
      (Field::LastName, Reason::Missing),
      (Field::Department, Reason::Missing),
    ]);

    let errors =
      validate(&draft(json!({ "lastName": "Black", "department": "IT" })));
    assert_eq!(reasons(&errors), vec![(Field::FirstName, Reason::Missing)]);
  }

  #[test]
  fn empty_first_name_is_the_only_error() {
    let errors = validate(&draft(json!({
      "firstName": "",
      "lastName": "Black",
      "department": "IT",
    })));
    assert_eq!(reasons(&errors), vec![(Field::FirstName, Reason::Empty)]);
  }

  #[test]
  fn non_text_values_are_rejected() {
    let errors = validate(&draft(json!({
      "firstName": 123,
      "lastName": true,
      "department": "IT",
    })));
    assert_eq!(reasons(&errors), vec![
      (Field::FirstName, Reason::NotText),
      (Field::LastName, Reason::NotText),
    ]);

    let errors = validate(&draft(json!({
      "firstName": "",
      "lastName": "Black",
      "department": 23.98,
    })));
    assert_eq!(reasons(&errors), vec![
      (Field::FirstName, Reason::Empty),
      (Field::Department, Reason::NotText),
    ]);

    let errors = validate(&draft(json!({
      "firstName": { "given": "Ana" },
      "lastName": ["Black"],
      "department": { "id": "D1" },
    })));
    assert!(errors.iter().all(|e| e.reason == Reason::NotText));
    assert_eq!(errors.len(), 3);
  }

  #[test]
  fn null_counts_as_missing() {
    let errors = validate(&draft(json!({
      "firstName": null,
      "lastName": "Black",
      "department": "IT",
    })));
    assert_eq!(reasons(&errors), vec![(Field::FirstName, Reason::Missing)]);
  }

  #[test]
  fn well_formed_candidates_pass() {
    for (first, last, dep) in
      [("John", "Smith", "IT"), ("Ana", "Black", "Management")]
    {
      assert!(validate(&EmployeeDraft::new(first, last, dep)).is_empty());
    }
  }

  #[test]
  fn empty_department_reference_is_not_checked_for_content() {
    let errors = validate(&EmployeeDraft::new("Ana", "Black", ""));
    assert!(errors.is_empty());
  }

  #[test]
  fn patch_skips_absent_fields() {
    let d = draft(json!({ "firstName": "Anna" }));
    assert!(validate_patch(&d).is_empty());

    let patch = d.into_patch().unwrap();
    assert_eq!(patch.first_name.as_deref(), Some("Anna"));
    assert!(patch.last_name.is_none());
    assert!(patch.department.is_none());
  }

  #[test]
  fn patch_rules_match_full_validation_when_all_fields_present() {
    let d = draft(json!({
      "firstName": "",
      "lastName": 7,
      "department": "IT",
    }));
    assert_eq!(validate_patch(&d), validate(&d));
    assert!(d.into_patch().is_err());
  }

  #[test]
  fn into_new_employee_carries_values() {
    let new = EmployeeDraft::new("Joe", "Red", "D1")
      .into_new_employee()
      .unwrap();
    assert_eq!(new.first_name, "Joe");
    assert_eq!(new.last_name, "Red");
    assert_eq!(new.department, RecordId::from("D1"));
  }

  #[test]
  fn error_list_renders_for_logs() {
    let err = draft(json!({})).into_new_employee().unwrap_err();
    assert_eq!(
      err.to_string(),
      "firstName is required; lastName is required; department is required"
    );
  }
}
