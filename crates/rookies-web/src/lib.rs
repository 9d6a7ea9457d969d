//! HTTP layer for the Rookies roster.
//!
//! Exposes an axum [`Router`] under `/NashTech` backed by any
//! [`PersonStore`], wrapped in the failure mapping stage.

pub mod error;
pub mod export;
pub mod extract;
pub mod form;
pub mod handlers;
pub mod middleware;

#[cfg(test)]
mod testing;

pub use error::Error;

use std::path::PathBuf;

use axum::{
  Router,
  routing::{get, post},
};
use rookies_core::{PersonService, PersonStore};
use serde::Deserialize;

use handlers::{create, delete, details, edit, list};

/// Mount point of every roster route.
pub const BASE_PATH: &str = "/NashTech";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROOKIES_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// Load the sample roster when the store is empty.
  pub seed:       bool,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub people: PersonService<S>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self { Self { people: self.people.clone() } }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application [`Router`], wrapped by [`middleware::wrap`].
pub fn router<S>(state: AppState<S>) -> Router
where
  S: PersonStore + 'static,
{
  let routes = Router::new()
    .route(BASE_PATH, get(list::handler::<S>))
    .route(
      "/NashTech/AddMember",
      get(create::form).post(create::submit::<S>),
    )
    .route(
      "/NashTech/EditMember/{id}",
      get(edit::form::<S>).post(edit::submit::<S>),
    )
    .route("/NashTech/Delete", post(delete::handler::<S>))
    .route("/NashTech/ExportToExcel", get(handlers::export::handler::<S>))
    .route("/NashTech/{id}", get(details::handler::<S>))
    .with_state(state);
  middleware::wrap(routes)
}

// ─── Integration tests ────────────────────────────────────────────────────────
