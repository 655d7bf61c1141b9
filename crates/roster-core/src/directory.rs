//! [`Directory`] — the six employee operations.
//!
//! Each operation is a thin composition of validation, a store call and,
//! for reads, department resolution. Outcomes are mapped onto
//! [`Error`](crate::Error): validation failures, missing records, and opaque
//! store failures.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
  Error, Result,
  department::Department,
  employee::{Employee, EmployeeDraft, ResolvedEmployee},
  record::RecordId,
  resolve::RelationResolver,
  sample::pick_random,
  store::RecordStore,
};

/// Employee operations over an employee collection `E` and the department
/// collection `D` it references.
pub struct Directory<E, D> {
  employees:   E,
  departments: D,
}

impl<E, D> Directory<E, D>
where
  E: RecordStore<Record = Employee>,
  D: RecordStore<Record = Department>,
{
  pub fn new(employees: E, departments: D) -> Self {
    Self { employees, departments }
  }

  fn resolver(&self) -> RelationResolver<'_, D> {
    RelationResolver::new(&self.departments)
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Every employee, with departments resolved. An empty collection is an
  /// empty list, not an error.
  pub async fn list(&self) -> Result<Vec<ResolvedEmployee>> {
    let employees = self.employees.find_all().await.map_err(Error::store)?;
    self
      .resolver()
      .resolve_all(employees)
      .await
      .map_err(Error::store)
  }

  /// One employee chosen uniformly at random, using a generator freshly
  /// seeded from OS entropy.
  pub async fn random(&self) -> Result<ResolvedEmployee> {
    let mut rng = StdRng::from_entropy();
    self.random_with(&mut rng).await
  }

  /// As [`Self::random`], drawing from a caller-supplied generator.
  pub async fn random_with<R>(&self, rng: &mut R) -> Result<ResolvedEmployee>
  where
    R: Rng + Send,
  {
    let employee = pick_random(&self.employees, rng)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| Error::NotFound("no employees".to_owned()))?;
    self.resolver().resolve(employee).await.map_err(Error::store)
  }

  pub async fn get_by_id(&self, id: RecordId) -> Result<ResolvedEmployee> {
    let employee = self
      .employees
      .find_by_id(id.clone())
      .await
      .map_err(Error::store)?
      .ok_or_else(|| Error::NotFound(format!("employee {id} not found")))?;
    self.resolver().resolve(employee).await.map_err(Error::store)
  }

  // ── Writes ────────────────────────────────────────────────────────────

  /// Validate and persist a new employee. The department reference is not
  /// checked for existence.
  pub async fn create(&self, draft: EmployeeDraft) -> Result<Employee> {
    let new = draft.into_new_employee()?;
    let employee = self.employees.insert(new).await.map_err(Error::store)?;
    debug!(id = %employee.id, "employee created");
    Ok(employee)
  }

  /// Overwrite the fields present in `draft`; absent fields keep their
  /// current values. Present fields are validated before the store is
  /// touched.
  pub async fn update(
    &self,
    id: RecordId,
    draft: EmployeeDraft,
  ) -> Result<Employee> {
    let patch = draft.into_patch()?;
    let employee = self
      .employees
      .update_by_id(id.clone(), patch)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| Error::NotFound(format!("employee {id} not found")))?;
    debug!(%id, "employee updated");
    Ok(employee)
  }

  pub async fn delete(&self, id: RecordId) -> Result<Employee> {
    let employee = self
      .employees
      .delete_by_id(id.clone())
      .await
      .map_err(Error::store)?
      .ok_or_else(|| Error::NotFound(format!("employee {id} not found")))?;
    debug!(%id, "employee deleted");
    Ok(employee)
  }
}
