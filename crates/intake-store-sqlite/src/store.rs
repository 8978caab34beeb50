//! [`SqliteStore`] — the SQLite implementation of [`SubmissionStore`].

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use intake_core::{
  store::SubmissionStore,
  submission::{NewSubmission, StoredSubmission},
};

use crate::{
  Result,
  encode::{RawSubmission, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A submission store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
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
}

// ─── SubmissionStore impl ────────────────────────────────────────────────────

impl SubmissionStore for SqliteStore {
  type Error = crate::Error;

  async fn add_submission(&self, input: NewSubmission) -> Result<StoredSubmission> {
    let stored = StoredSubmission {
      id:         Uuid::new_v4(),
      first_name: input.first_name,
      last_name:  input.last_name,
      email:      input.email,
      message:    input.message,
      created_at: Utc::now(),
      read:       false,
    };

    let id_str = encode_uuid(stored.id);
    let at_str = encode_dt(stored.created_at);
    let row = stored.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO submissions (
             id, first_name, last_name, email, message, created_at, read
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            id_str,
            row.first_name,
            row.last_name,
            row.email,
            row.message,
            at_str,
            row.read,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(stored)
  }

  async fn list_submissions(&self) -> Result<Vec<StoredSubmission>> {
    let raws: Vec<RawSubmission> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, first_name, last_name, email, message, created_at, read
           FROM submissions
           ORDER BY created_at DESC, rowid DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawSubmission {
              id:         row.get(0)?,
              first_name: row.get(1)?,
              last_name:  row.get(2)?,
              email:      row.get(3)?,
              message:    row.get(4)?,
              created_at: row.get(5)?,
              read:       row.get(6)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(RawSubmission::into_submission)
      .collect()
  }
}
