//! `GET|POST /NashTech/AddMember` — the create form and its submission.

use axum::{
  extract::State,
  response::{IntoResponse, Response},
};
use rookies_core::PersonStore;

use crate::{
  AppState,
  extract::Form,
  form::{FormView, PersonForm},
  handlers::to_list,
};

/// An empty form.
pub async fn form() -> FormView { FormView::blank() }

/// Persist a new member and redirect to the list, or re-render the form with
/// the submitted values and what went wrong.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<PersonForm>,
) -> Response
where
  S: PersonStore + 'static,
{
  let input = match form.parse() {
    Ok(input) => input,
    Err(errors) => return FormView::rejected(None, form, errors).into_response(),
  };

  match state.people.create(input).await {
    Ok(person) => {
      tracing::info!(person_id = %person.id, "member added");
      to_list().into_response()
    }
    Err(e) => {
      tracing::warn!(error = %e, "failed to add member");
      FormView::with_error(None, form, e.to_string()).into_response()
    }
  }
}
