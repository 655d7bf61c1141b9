//! The `RecordStore` trait.
//!
//! One store instance serves one collection. It is implemented by storage
//! backends (e.g. `roster-store-sqlite`); the resolver, the sampler and
//! [`crate::Directory`] depend on this abstraction, not on any backend.

use std::future::Future;

use crate::record::{Record, RecordId};

/// Abstraction over a persistent collection of one entity type.
///
/// Every method is atomic on its own; nothing here spans two calls. A
/// missing id is reported as `Ok(None)`, never as an error. `Err` is
/// reserved for failures at the storage boundary.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  type Record: Record;
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new record and return it with its assigned id.
  fn insert(
    &self,
    new: <Self::Record as Record>::New,
  ) -> impl Future<Output = Result<Self::Record, Self::Error>> + Send + '_;

  /// Retrieve a record by id.
  fn find_by_id(
    &self,
    id: RecordId,
  ) -> impl Future<Output = Result<Option<Self::Record>, Self::Error>> + Send + '_;

  /// Every record, in insertion order.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Self::Record>, Self::Error>> + Send + '_;

  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// The record at `position` in the same order as [`Self::find_all`]:
  /// skip `position` records and take the next one.
  fn find_nth(
    &self,
    position: u64,
  ) -> impl Future<Output = Result<Option<Self::Record>, Self::Error>> + Send + '_;

  /// Apply the fields present in `patch` and return the post-update record.
  fn update_by_id(
    &self,
    id: RecordId,
    patch: <Self::Record as Record>::Patch,
  ) -> impl Future<Output = Result<Option<Self::Record>, Self::Error>> + Send + '_;

  /// Remove a record and return what was removed.
  fn delete_by_id(
    &self,
    id: RecordId,
  ) -> impl Future<Output = Result<Option<Self::Record>, Self::Error>> + Send + '_;
}
