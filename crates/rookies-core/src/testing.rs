//! An in-memory [`PersonStore`] used by the service tests.

use std::sync::{
  Mutex,
  atomic::{AtomicUsize, Ordering},
};

use uuid::Uuid;

use crate::{
  Error, Result,
  person::{NewPerson, Person},
  store::PersonStore,
};

#[derive(Default)]
pub struct MemoryStore {
  people: Mutex<Vec<Person>>,
  writes: AtomicUsize,
}

impl MemoryStore {
  /// Number of successful create/update/delete calls.
  pub fn write_count(&self) -> usize { self.writes.load(Ordering::SeqCst) }

  fn bump(&self) { self.writes.fetch_add(1, Ordering::SeqCst); }
}

impl PersonStore for MemoryStore {
  type Error = Error;

  async fn list_people(&self) -> Result<Vec<Person>> {
    Ok(self.people.lock().unwrap().clone())
  }

  async fn get_person(&self, id: Uuid) -> Result<Option<Person>> {
    Ok(self.people.lock().unwrap().iter().find(|p| p.id == id).cloned())
  }

  async fn create_person(&self, input: NewPerson) -> Result<Person> {
    input.validate()?;
    let person = input.with_id(Uuid::new_v4());
    self.people.lock().unwrap().push(person.clone());
    self.bump();
    Ok(person)
  }

  async fn update_person(&self, person: &Person) -> Result<()> {
    person.validate()?;
    let mut people = self.people.lock().unwrap();
    let slot = people
      .iter_mut()
      .find(|p| p.id == person.id)
      .ok_or(Error::NotFound(person.id))?;
    *slot = person.clone();
    self.bump();
    Ok(())
  }

  async fn delete_person(&self, id: Uuid) -> Result<()> {
    let mut people = self.people.lock().unwrap();
    let before = people.len();
    people.retain(|p| p.id != id);
    if people.len() == before {
      return Err(Error::NotFound(id));
    }
    self.bump();
    Ok(())
  }
}
