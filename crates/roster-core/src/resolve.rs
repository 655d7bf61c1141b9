//! Following an employee's department reference.
//!
//! Resolution is an explicit second fetch against the department
//! collection. A reference that points nowhere is not an error: the
//! employee comes back with `department: None`.

use tracing::warn;

use crate::{
  department::Department,
  employee::{Employee, ResolvedEmployee},
  store::RecordStore,
};

/// Read-only resolver over a department collection.
pub struct RelationResolver<'a, D> {
  departments: &'a D,
}

impl<'a, D> RelationResolver<'a, D>
where
  D: RecordStore<Record = Department>,
{
  pub fn new(departments: &'a D) -> Self { Self { departments } }

  /// Resolve one employee with a single department lookup.
  pub async fn resolve(
    &self,
    employee: Employee,
  ) -> Result<ResolvedEmployee, D::Error> {
    let department = self
      .departments
      .find_by_id(employee.department.clone())
      .await?;

    if department.is_none() {
      warn!(
        employee = %employee.id,
        department = %employee.department,
        "dangling department reference"
      );
    }

    Ok(ResolvedEmployee::new(employee, department))
  }

  /// Resolve each employee in order, one lookup per employee.
  pub async fn resolve_all(
    &self,
    employees: Vec<Employee>,
  ) -> Result<Vec<ResolvedEmployee>, D::Error> {
    let mut resolved = Vec::with_capacity(employees.len());
    for employee in employees {
      resolved.push(self.resolve(employee).await?);
    }
    Ok(resolved)
  }
}
