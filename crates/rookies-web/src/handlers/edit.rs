//! `GET|POST /NashTech/EditMember/{id}` — the edit form and its submission.

use axum::{
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use rookies_core::PersonStore;

use crate::{
  AppState,
  error::Error,
  extract::{Form, Path},
  form::{FormView, PersonForm},
  handlers::{lenient_id, route_id, to_list},
};

/// The form populated from the stored member; bare 404 if absent.
pub async fn form<S>(
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
    Ok(person) => Ok(FormView::for_person(&person).into_response()),
    Err(e) if e.is_not_found() => Ok(StatusCode::NOT_FOUND.into_response()),
    Err(e) => Err(e.into()),
  }
}

/// Replace the member's fields and redirect to the list, or re-render the
/// form. The id always comes from the path.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Path(raw_id): Path<String>,
  Form(form): Form<PersonForm>,
) -> Response
where
  S: PersonStore + 'static,
{
  let id = lenient_id(&raw_id);

  let person = match form.parse() {
    Ok(input) => input.with_id(id),
    Err(errors) => {
      for e in &errors {
        tracing::debug!(field = e.field, "validation error: {}", e.message);
      }
      return FormView::rejected(Some(id), form, errors).into_response();
    }
  };

  match state.people.update(&person).await {
    Ok(()) => {
      tracing::info!(person_id = %id, "member updated");
      to_list().into_response()
    }
    Err(e) => {
      tracing::warn!(person_id = %id, error = %e, "failed to update member");
      FormView::with_error(Some(id), form, e.to_string()).into_response()
    }
  }
}
