//! [`PersonService`] — existence checks layered over a [`PersonStore`].
//!
//! The store stays a plain CRUD layer; this service owns the rule that an
//! id must be well-formed and present before it is read, updated or
//! deleted.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
  Error, Result,
  person::{NewPerson, Person},
  store::PersonStore,
};

/// Domain service handed to the web layer at composition time.
///
/// Cloning is cheap — the store is reference-counted.
pub struct PersonService<S> {
  store: Arc<S>,
}

impl<S> Clone for PersonService<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: PersonStore> PersonService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub async fn get_all(&self) -> Result<Vec<Person>> {
    self.store.list_people().await.map_err(Into::into)
  }

  /// Fetch a person, failing with [`Error::NotFound`] if absent and
  /// [`Error::InvalidArgument`] for the nil id.
  pub async fn get_by_id(&self, id: Uuid) -> Result<Person> {
    ensure_id(id)?;
    self
      .store
      .get_person(id)
      .await
      .map_err(Into::<Error>::into)?
      .ok_or(Error::NotFound(id))
  }

  pub async fn create(&self, input: NewPerson) -> Result<Person> {
    self.store.create_person(input).await.map_err(Into::into)
  }

  pub async fn update(&self, person: &Person) -> Result<()> {
    self.get_by_id(person.id).await?;
    self.store.update_person(person).await.map_err(Into::into)
  }

  pub async fn delete(&self, id: Uuid) -> Result<()> {
    self.get_by_id(id).await?;
    self.store.delete_person(id).await.map_err(Into::into)
  }
}

fn ensure_id(id: Uuid) -> Result<()> {
  if id.is_nil() {
    return Err(Error::InvalidArgument(
      "Invalid ID: ID cannot be empty.".to_owned(),
    ));
  }
  Ok(())
}
