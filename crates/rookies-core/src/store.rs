//! The `PersonStore` trait — the CRUD contract for a roster backend.
//!
//! The trait is implemented by storage backends (e.g. `rookies-store-sqlite`).
//! [`crate::service::PersonService`] and the web layer depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::person::{NewPerson, Person};

/// Abstraction over a roster store backend.
///
/// Backends validate every write and report blank required fields as a
/// validation failure rather than storing them. Reads are not cached.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  /// Backend errors must be classifiable as a domain [`crate::Error`].
  type Error: std::error::Error + Send + Sync + Into<crate::Error> + 'static;

  /// Every stored person, in the backend's natural order.
  fn list_people(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Retrieve a person by id. Returns `None` if not found.
  fn get_person(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Validate and persist a new person under a freshly generated id.
  fn create_person(
    &self,
    input: NewPerson,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Validate and replace every non-id field of an existing person.
  /// Fails with a not-found error if no row has `person.id`.
  fn update_person<'a>(
    &'a self,
    person: &'a Person,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Hard-delete a person. Fails with a not-found error if absent.
  fn delete_person(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
