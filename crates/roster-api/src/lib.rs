//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by a [`roster_core::Directory`] over any
//! pair of [`RecordStore`]s. Auth, TLS, and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", roster_api::api_router(directory.clone()))
//! ```

pub mod employees;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_core::{
  Directory, department::Department, employee::Employee, store::RecordStore,
};

pub use error::ApiError;

/// Build the API router for `directory`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<E, D>(directory: Arc<Directory<E, D>>) -> Router<()>
where
  E: RecordStore<Record = Employee> + 'static,
  D: RecordStore<Record = Department> + 'static,
{
  Router::new()
    .route(
      "/employees",
      get(employees::list::<E, D>).post(employees::create::<E, D>),
    )
    .route("/employees/random", get(employees::random::<E, D>))
    .route(
      "/employees/{id}",
      get(employees::get_one::<E, D>)
        .put(employees::update::<E, D>)
        .delete(employees::delete::<E, D>),
    )
    .with_state(directory)
}
