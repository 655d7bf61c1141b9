//! Error types for `roster-core`.

use thiserror::Error;

use crate::validate::ValidationErrors;

/// The outcome taxonomy shared by every directory operation.
#[derive(Debug, Error)]
pub enum Error {
  /// The candidate record failed field validation. Raised before any store
  /// mutation.
  #[error("validation failed: {0}")]
  Validation(ValidationErrors),

  /// The identifier does not resolve to a live record, or there was nothing
  /// to pick from.
  #[error("not found: {0}")]
  NotFound(String),

  /// The storage backend failed. The source is for logs only and must not
  /// be shown to callers.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

impl From<ValidationErrors> for Error {
  fn from(errors: ValidationErrors) -> Self { Self::Validation(errors) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
