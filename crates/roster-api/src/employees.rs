//! Handlers for `/employees` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/employees` | All employees, departments resolved |
//! | `GET`    | `/employees/random` | One employee chosen uniformly; 404 if none |
//! | `GET`    | `/employees/:id` | Department resolved; 404 if not found |
//! | `POST`   | `/employees` | Body: `{"firstName","lastName","department"}`; returns 201 + stored record |
//! | `PUT`    | `/employees/:id` | Body: any subset of the three fields; returns the updated record |
//! | `DELETE` | `/employees/:id` | Returns the deleted record |
//!
//! Invalid field values answer 422 with the per-field error list. A body that
//! is not a JSON object answers with axum's rejection status and an
//! `{"error": ...}` body.

use std::sync::Arc;

use axum::{
  Json,
  extract::{FromRequest, Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  Directory, RecordId,
  department::Department,
  employee::{Employee, EmployeeDraft, ResolvedEmployee},
  store::RecordStore,
};

use crate::error::ApiError;

type DirectoryState<E, D> = State<Arc<Directory<E, D>>>;

/// [`Json`] whose rejections are reported as [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

// ─── Reads ────────────────────────────────────────────────────────────────────

/// `GET /employees`
pub async fn list<E, D>(
  State(dir): DirectoryState<E, D>,
) -> Result<Json<Vec<ResolvedEmployee>>, ApiError>
where
  E: RecordStore<Record = Employee>,
  D: RecordStore<Record = Department>,
{
  Ok(Json(dir.list().await?))
}

/// `GET /employees/random`
pub async fn random<E, D>(
  State(dir): DirectoryState<E, D>,
) -> Result<Json<ResolvedEmployee>, ApiError>
where
  E: RecordStore<Record = Employee>,
  D: RecordStore<Record = Department>,
{
  Ok(Json(dir.random().await?))
}

/// `GET /employees/:id`
pub async fn get_one<E, D>(
  State(dir): DirectoryState<E, D>,
  Path(id): Path<RecordId>,
) -> Result<Json<ResolvedEmployee>, ApiError>
where
  E: RecordStore<Record = Employee>,
  D: RecordStore<Record = Department>,
{
  Ok(Json(dir.get_by_id(id).await?))
}

// ─── Writes ───────────────────────────────────────────────────────────────────

/// `POST /employees` — returns 201 + the stored [`Employee`].
pub async fn create<E, D>(
  State(dir): DirectoryState<E, D>,
  JsonBody(draft): JsonBody<EmployeeDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  E: RecordStore<Record = Employee>,
  D: RecordStore<Record = Department>,
{
  let employee = dir.create(draft).await?;
  Ok((StatusCode::CREATED, Json(employee)))
}

/// `PUT /employees/:id` — fields left out of the body keep their values.
pub async fn update<E, D>(
  State(dir): DirectoryState<E, D>,
  Path(id): Path<RecordId>,
  JsonBody(draft): JsonBody<EmployeeDraft>,
) -> Result<Json<Employee>, ApiError>
where
  E: RecordStore<Record = Employee>,
  D: RecordStore<Record = Department>,
{
  Ok(Json(dir.update(id, draft).await?))
}

/// `DELETE /employees/:id`
pub async fn delete<E, D>(
  State(dir): DirectoryState<E, D>,
  Path(id): Path<RecordId>,
) -> Result<Json<Employee>, ApiError>
where
  E: RecordStore<Record = Employee>,
  D: RecordStore<Record = Department>,
{
  Ok(Json(dir.delete(id).await?))
}
