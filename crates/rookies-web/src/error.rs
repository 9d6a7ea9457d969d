//! Handler error type.
//!
//! An [`Error`] escaping a handler does not pick its own status code. Its
//! `IntoResponse` marks the response with a [`Failure`], which
//! [`crate::middleware::map_failures`] turns into the final status and body.

use axum::{
  extract::rejection::{FormRejection, PathRejection, QueryRejection},
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::middleware::{Failure, FailureKind};

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Domain(#[from] rookies_core::Error),

  #[error("spreadsheet error: {0}")]
  Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

  #[error(transparent)]
  Form(#[from] FormRejection),

  #[error(transparent)]
  Query(#[from] QueryRejection),

  #[error(transparent)]
  Path(#[from] PathRejection),
}

impl Error {
  /// Classify this error for the failure mapping stage.
  pub fn failure(&self) -> Failure {
    use rookies_core::Error as Domain;

    let kind = match self {
      Error::Domain(Domain::NotFound(_)) => FailureKind::NotFound,
      Error::Domain(Domain::InvalidArgument(_) | Domain::Validation(_))
      | Error::Form(_)
      | Error::Query(_)
      | Error::Path(_) => FailureKind::InvalidArgument,
      Error::Domain(Domain::Unauthorized(_)) => FailureKind::Unauthorized,
      Error::Domain(Domain::Store(_)) | Error::Spreadsheet(_) => {
        FailureKind::Unhandled
      }
    };
    Failure::new(kind, self.to_string())
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response { self.failure().into_response() }
}
