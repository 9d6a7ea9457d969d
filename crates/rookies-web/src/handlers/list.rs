//! `GET /NashTech[?filter=<filter>]` — the member list.

use axum::{
  Json,
  extract::State,
};
use rookies_core::{Filter, Person, PersonStore};
use serde::Deserialize;

use crate::{AppState, error::Error, extract::Query};

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// One of `All`, `Male`, `Oldest`, `Equals2000`, `Greaterthan2000`,
  /// `Lessthan2000`; anything else lists everyone.
  pub filter: Option<String>,
}

pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Person>>, Error>
where
  S: PersonStore + 'static,
{
  let filter = Filter::from_query(params.filter.as_deref());
  let people = state.people.get_all().await?;
  Ok(Json(filter.apply(people)))
}
