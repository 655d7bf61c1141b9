//! Department seeding. The server owns the department collection; the HTTP
//! API only ever reads it.

use roster_core::{department::Department, store::RecordStore};
use tracing::info;

use crate::settings::DepartmentSeed;

/// Insert every seed whose id is not yet present. Existing departments are
/// left as they are. Returns the number inserted.
pub async fn seed_departments<D>(
  departments: &D,
  seeds: &[DepartmentSeed],
) -> Result<usize, D::Error>
where
  D: RecordStore<Record = Department>,
{
  let mut inserted = 0;
  for seed in seeds {
    if departments.find_by_id(seed.id.clone()).await?.is_some() {
      continue;
    }
    let department = departments.insert(seed.clone().into()).await?;
    info!(id = %department.id, name = %department.name, "department seeded");
    inserted += 1;
  }
  Ok(inserted)
}

#[cfg(test)]
mod tests {
  use roster_store_sqlite::SqliteStore;

  use super::*;

  fn seeds() -> Vec<DepartmentSeed> {
    vec![
      DepartmentSeed { id: "D1".into(), name: "Marketing".into() },
      DepartmentSeed { id: "D2".into(), name: "IT".into() },
    ]
  }

  #[tokio::test]
  async fn seeding_is_idempotent() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let departments = store.departments();

    assert_eq!(seed_departments(&departments, &seeds()).await.unwrap(), 2);
    assert_eq!(seed_departments(&departments, &seeds()).await.unwrap(), 0);
    assert_eq!(departments.count().await.unwrap(), 2);
  }

  #[tokio::test]
  async fn seeding_keeps_existing_names() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let departments = store.departments();
    departments
      .insert(roster_core::department::NewDepartment::with_id("D1", "Sales"))
      .await
      .unwrap();

    assert_eq!(seed_departments(&departments, &seeds()).await.unwrap(), 1);
    let d1 = departments.find_by_id("D1".into()).await.unwrap().unwrap();
    assert_eq!(d1.name, "Sales");
  }
}
