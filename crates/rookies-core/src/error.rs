//! Error types for `rookies-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("Person with ID {0} not found.")]
  NotFound(Uuid),

  /// A person failed field validation before a write.
  #[error("Validation failed: {0}")]
  Validation(String),

  #[error("{0}")]
  InvalidArgument(String),

  #[error("{0}")]
  Unauthorized(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap an opaque backend error.
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }

  pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
