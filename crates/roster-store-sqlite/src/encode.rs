//! Encoding and decoding between records and the JSON text stored in the
//! `doc` column.
//!
//! Both directions report failures as [`rusqlite::Error`] so they can be
//! used with `?` inside `tokio_rusqlite` closures.

use rusqlite::types::Type;
use serde::{Serialize, de::DeserializeOwned};

pub fn encode_doc<T: Serialize>(record: &T) -> rusqlite::Result<String> {
  serde_json::to_string(record)
    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

pub fn decode_doc<T: DeserializeOwned>(doc: &str) -> rusqlite::Result<T> {
  serde_json::from_str(doc).map_err(|e| {
    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
  })
}

#[cfg(test)]
mod tests {
  use roster_core::employee::Employee;

  use super::*;

  #[test]
  fn employee_doc_uses_camel_case_fields() {
    let employee = Employee {
      id:         "e1".into(),
      first_name: "Ana".into(),
      last_name:  "Black".into(),
      department: "D1".into(),
    };
    let doc = encode_doc(&employee).unwrap();
    assert_eq!(
      doc,
      r#"{"id":"e1","firstName":"Ana","lastName":"Black","department":"D1"}"#
    );
    assert_eq!(decode_doc::<Employee>(&doc).unwrap(), employee);
  }

  #[test]
  fn corrupt_doc_is_a_conversion_failure() {
    let err = decode_doc::<Employee>("{not json").unwrap_err();
    assert!(matches!(err, rusqlite::Error::FromSqlConversionFailure(..)));
  }
}
