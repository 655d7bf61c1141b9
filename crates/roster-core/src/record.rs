//! Identifiers and the [`Record`] trait every stored entity implements.

use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uuid::Uuid;

/// An opaque record identifier.
///
/// Employee ids are minted by the store; department ids come from whoever
/// owns the department collection.
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
  /// A fresh, never-before-seen identifier.
  pub fn generate() -> Self { Self(Uuid::new_v4().hyphenated().to_string()) }

  pub fn as_str(&self) -> &str { &self.0 }

  pub fn into_string(self) -> String { self.0 }
}

impl fmt::Display for RecordId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<String> for RecordId {
  fn from(s: String) -> Self { Self(s) }
}

impl From<&str> for RecordId {
  fn from(s: &str) -> Self { Self(s.to_owned()) }
}

/// An entity kind that can live in a [`crate::store::RecordStore`].
///
/// `New` is the insert payload (no id yet, unless the caller supplies one),
/// `Patch` is a partial update where absent fields are left untouched.
pub trait Record:
  Clone + Send + Sync + Serialize + DeserializeOwned + 'static
{
  type New: Send + 'static;
  type Patch: Send + 'static;

  /// Name of the backing collection, e.g. `"employees"`.
  const COLLECTION: &'static str;

  fn id(&self) -> &RecordId;

  /// The id requested by an insert payload, if any. When `None` the store
  /// generates one.
  ///
  /// Only generated ids are guaranteed never to be reused. A requested id
  /// is unique among live records, but once that record is deleted the same
  /// id can be inserted again. Departments are the only records that take
  /// requested ids, and nothing deletes them.
  fn requested_id(_new: &Self::New) -> Option<RecordId> { None }

  /// Build the stored record from an insert payload and its assigned id.
  fn assemble(id: RecordId, new: Self::New) -> Self;

  /// Apply the fields present in `patch`.
  fn apply(&mut self, patch: Self::Patch);
}
