//! `GET /NashTech/{id}` — a single member.

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use rookies_core::PersonStore;

use crate::{AppState, error::Error, extract::Path, handlers::route_id};

pub const NOT_FOUND_BODY: &str = "Member not found";

pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Path(raw_id): Path<String>,
) -> Result<Response, Error>
where
  S: PersonStore + 'static,
{
  let Some(id) = route_id(&raw_id) else {
    return Ok(StatusCode::NOT_FOUND.into_response());
  };

  match state.people.get_by_id(id).await {
    Ok(person) => Ok(Json(person).into_response()),
    Err(e) if e.is_not_found() => {
      Ok((StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response())
    }
    Err(e) => Err(e.into()),
  }
}
