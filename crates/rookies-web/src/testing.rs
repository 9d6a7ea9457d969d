//! Test doubles shared by the router and middleware tests.

use std::{
  io,
  sync::{Arc, Mutex},
};

use rookies_core::{Error, NewPerson, Person, PersonStore, Result};
use tracing::subscriber::DefaultGuard;
use uuid::Uuid;

// ─── Log capture ──────────────────────────────────────────────────────────────

/// Shared sink for a thread-local fmt subscriber.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

impl LogBuffer {
  pub fn contents(&self) -> String {
    String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
  }

  /// Lines at `level` (e.g. `"WARN"`).
  pub fn count(&self, level: &str) -> usize {
    self.contents().lines().filter(|l| l.contains(level)).count()
  }
}

/// Capture INFO and above on this thread until the guard drops.
pub fn capture_logs() -> (LogBuffer, DefaultGuard) {
  let logs = LogBuffer::default();
  let sink = logs.clone();
  let subscriber = tracing_subscriber::fmt()
    .with_writer(move || sink.clone())
    .with_ansi(false)
    .with_max_level(tracing::Level::INFO)
    .finish();
  (logs, tracing::subscriber::set_default(subscriber))
}

// ─── Failing store ────────────────────────────────────────────────────────────

/// A store that is empty and refuses every write with a backend error.
#[derive(Default)]
pub struct FailingStore;

fn disk_full() -> Error { Error::store(io::Error::other("disk full")) }

impl PersonStore for FailingStore {
  type Error = Error;

  async fn list_people(&self) -> Result<Vec<Person>> { Ok(Vec::new()) }

  async fn get_person(&self, _id: Uuid) -> Result<Option<Person>> { Ok(None) }

  async fn create_person(&self, _input: NewPerson) -> Result<Person> {
    Err(disk_full())
  }

  async fn update_person(&self, _person: &Person) -> Result<()> {
    Err(disk_full())
  }

  async fn delete_person(&self, _id: Uuid) -> Result<()> { Err(disk_full()) }
}
