//! `POST /NashTech/Delete` — hard-delete a member.

use axum::{
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use rookies_core::PersonStore;
use serde::Deserialize;

use crate::{
  AppState,
  extract::Form,
  handlers::{lenient_id, to_list},
};

pub const NOT_FOUND_BODY: &str = "Person not found.";

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
  #[serde(default)]
  pub id: String,
}

/// Every failure in the lookup-then-delete sequence ends as a 404; a missing
/// member gets a fixed body, anything else carries the error message.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Form(body): Form<DeleteForm>,
) -> Response
where
  S: PersonStore + 'static,
{
  let id = lenient_id(&body.id);

  let result: rookies_core::Result<()> = async {
    state.people.get_by_id(id).await?;
    state.people.delete(id).await
  }
  .await;

  match result {
    Ok(()) => {
      tracing::info!(person_id = %id, "member deleted");
      to_list().into_response()
    }
    Err(e) if e.is_not_found() => {
      (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
    }
    Err(e) => (StatusCode::NOT_FOUND, e.to_string()).into_response(),
  }
}
