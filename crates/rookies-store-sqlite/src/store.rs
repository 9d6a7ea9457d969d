//! [`SqliteStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use rookies_core::{NewPerson, Person, PersonStore};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{PersonParams, RawPerson, encode_uuid},
  schema::{PERSON_COLUMNS, SCHEMA},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster backed by a single SQLite file.
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

  /// Insert a fully-built [`Person`] into the `people` table.
  pub(crate) async fn insert_person(&self, person: &Person) -> Result<()> {
    let p = PersonParams::from(person);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO people (
             person_id, first_name, last_name, gender,
             date_of_birth, phone_number, birth_place, is_graduated
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            p.person_id,
            p.first_name,
            p.last_name,
            p.gender,
            p.date_of_birth,
            p.phone_number,
            p.birth_place,
            p.is_graduated,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Number of rows in `people`.
  pub async fn count(&self) -> Result<usize> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM people", [], |r| r.get(0))?)
      })
      .await?;
    Ok(usize::try_from(n).unwrap_or_default())
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn list_people(&self) -> Result<Vec<Person>> {
    let raws: Vec<RawPerson> = self
      .conn
      .call(|conn| {
        // rowid order keeps results in insertion order.
        let mut stmt = conn.prepare(&format!(
          "SELECT {PERSON_COLUMNS} FROM people ORDER BY rowid"
        ))?;
        let rows = stmt
          .query_map([], RawPerson::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }

  async fn get_person(&self, id: Uuid) -> Result<Option<Person>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PERSON_COLUMNS} FROM people WHERE person_id = ?1"),
              rusqlite::params![id_str],
              RawPerson::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  async fn create_person(&self, input: NewPerson) -> Result<Person> {
    input.validate()?;

    let person = input.with_id(Uuid::new_v4());
    self.insert_person(&person).await?;

    tracing::debug!(person_id = %person.id, "created person");
    Ok(person)
  }

  async fn update_person(&self, person: &Person) -> Result<()> {
    person.validate()?;

    let id = person.id;
    let p = PersonParams::from(person);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE people SET
             first_name    = ?2,
             last_name     = ?3,
             gender        = ?4,
             date_of_birth = ?5,
             phone_number  = ?6,
             birth_place   = ?7,
             is_graduated  = ?8
           WHERE person_id = ?1",
          rusqlite::params![
            p.person_id,
            p.first_name,
            p.last_name,
            p.gender,
            p.date_of_birth,
            p.phone_number,
            p.birth_place,
            p.is_graduated,
          ],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::PersonNotFound(id));
    }
    tracing::debug!(person_id = %id, "updated person");
    Ok(())
  }

  async fn delete_person(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM people WHERE person_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::PersonNotFound(id));
    }
    tracing::debug!(person_id = %id, "deleted person");
    Ok(())
  }
}
