//! Error type for `rookies-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] rookies_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date parse error: {0}")]
  DateParse(#[from] chrono::ParseError),

  #[error("column decode error: {0}")]
  Decode(String),

  /// An update or delete matched no row.
  #[error("Person with ID {0} not found.")]
  PersonNotFound(uuid::Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for rookies_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::Core(inner) => inner,
      Error::PersonNotFound(id) => Self::NotFound(id),
      other => Self::store(other),
    }
  }
}
