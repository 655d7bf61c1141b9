//! [`SqliteStore`] and its per-collection [`RecordStore`] handles.

use std::{marker::PhantomData, path::Path};

use rusqlite::{OptionalExtension as _, TransactionBehavior};
use tracing::debug;

use roster_core::{
  Directory, Record, RecordId,
  department::Department,
  employee::Employee,
  store::RecordStore,
};

use crate::{
  Result,
  encode::{decode_doc, encode_doc},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roster database backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    let conn = tokio_rusqlite::Connection::open(&path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    debug!(?path, "sqlite store opened");
    Ok(store)
  }

  /// Open an in-memory store — useful for testing. Each call yields a
  /// fresh, isolated database.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    debug!("in-memory sqlite store opened");
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// A handle on the collection holding records of type `T`.
  pub fn collection<T: Record>(&self) -> Collection<T> {
    Collection { conn: self.conn.clone(), _record: PhantomData }
  }

  pub fn employees(&self) -> Collection<Employee> { self.collection() }

  pub fn departments(&self) -> Collection<Department> { self.collection() }

  /// A [`Directory`] over this database's employee and department
  /// collections.
  pub fn directory(
    &self,
  ) -> Directory<Collection<Employee>, Collection<Department>> {
    Directory::new(self.employees(), self.departments())
  }
}

// ─── Collection ──────────────────────────────────────────────────────────────

/// One table of a [`SqliteStore`], typed by the record it holds.
pub struct Collection<T> {
  conn:    tokio_rusqlite::Connection,
  _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
  fn clone(&self) -> Self {
    Self { conn: self.conn.clone(), _record: PhantomData }
  }
}

impl<T: Record> Collection<T> {
  /// Run a single-row `SELECT doc ...` and decode the result.
  async fn query_doc(
    &self,
    sql: String,
    param: rusqlite::types::Value,
  ) -> Result<Option<T>> {
    let record = self
      .conn
      .call(move |conn| {
        let doc: Option<String> = conn
          .query_row(&sql, rusqlite::params![param], |row| row.get(0))
          .optional()?;
        Ok(doc.as_deref().map(decode_doc::<T>).transpose()?)
      })
      .await?;
    Ok(record)
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl<T: Record> RecordStore for Collection<T> {
  type Record = T;
  type Error = crate::Error;

  async fn insert(&self, new: T::New) -> Result<T> {
    let id = T::requested_id(&new).unwrap_or_else(RecordId::generate);
    let record = T::assemble(id, new);
    let sql = format!("INSERT INTO {} (id, doc) VALUES (?1, ?2)", T::COLLECTION);

    let record = self
      .conn
      .call(move |conn| {
        let doc = encode_doc(&record)?;
        conn.execute(&sql, rusqlite::params![record.id().as_str(), doc])?;
        Ok(record)
      })
      .await?;

    Ok(record)
  }

  async fn find_by_id(&self, id: RecordId) -> Result<Option<T>> {
    let sql = format!("SELECT doc FROM {} WHERE id = ?1", T::COLLECTION);
    self.query_doc(sql, id.into_string().into()).await
  }

  async fn find_all(&self) -> Result<Vec<T>> {
    let sql = format!("SELECT doc FROM {} ORDER BY seq", T::COLLECTION);

    let records = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let docs = stmt
          .query_map([], |row| row.get::<_, String>(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(
          docs
            .iter()
            .map(|doc| decode_doc::<T>(doc))
            .collect::<rusqlite::Result<Vec<_>>>()?,
        )
      })
      .await?;

    Ok(records)
  }

  async fn count(&self) -> Result<u64> {
    let sql = format!("SELECT COUNT(*) FROM {}", T::COLLECTION);

    let n: i64 = self
      .conn
      .call(move |conn| Ok(conn.query_row(&sql, [], |row| row.get(0))?))
      .await?;

    Ok(u64::try_from(n).unwrap_or(0))
  }

  async fn find_nth(&self, position: u64) -> Result<Option<T>> {
    let sql = format!(
      "SELECT doc FROM {} ORDER BY seq LIMIT 1 OFFSET ?1",
      T::COLLECTION
    );
    let offset = i64::try_from(position).unwrap_or(i64::MAX);
    self.query_doc(sql, offset.into()).await
  }

  async fn update_by_id(&self, id: RecordId, patch: T::Patch) -> Result<Option<T>> {
    let select = format!("SELECT doc FROM {} WHERE id = ?1", T::COLLECTION);
    let update = format!("UPDATE {} SET doc = ?2 WHERE id = ?1", T::COLLECTION);
    let id_str = id.into_string();

    let record = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let doc: Option<String> = tx
          .query_row(&select, rusqlite::params![id_str], |row| row.get(0))
          .optional()?;
        let Some(doc) = doc else {
          return Ok(None);
        };

        let mut record = decode_doc::<T>(&doc)?;
        record.apply(patch);
        tx.execute(&update, rusqlite::params![id_str, encode_doc(&record)?])?;
        tx.commit()?;

        Ok(Some(record))
      })
      .await?;

    Ok(record)
  }

  async fn delete_by_id(&self, id: RecordId) -> Result<Option<T>> {
    let select = format!("SELECT doc FROM {} WHERE id = ?1", T::COLLECTION);
    let delete = format!("DELETE FROM {} WHERE id = ?1", T::COLLECTION);
    let id_str = id.into_string();

    let record = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let doc: Option<String> = tx
          .query_row(&select, rusqlite::params![id_str], |row| row.get(0))
          .optional()?;
        let Some(doc) = doc else {
          return Ok(None);
        };

        let record = decode_doc::<T>(&doc)?;
        tx.execute(&delete, rusqlite::params![id_str])?;
        tx.commit()?;

        Ok(Some(record))
      })
      .await?;

    Ok(record)
  }
}
