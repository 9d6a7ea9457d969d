//! `GET /NashTech/ExportToExcel` — download the roster as a spreadsheet.

use axum::{
  extract::State,
  http::header,
  response::{IntoResponse, Response},
};
use rookies_core::PersonStore;

use crate::{
  AppState,
  error::Error,
  export::{FILE_NAME, XLSX_CONTENT_TYPE, render_workbook},
};

pub async fn handler<S>(State(state): State<AppState<S>>) -> Result<Response, Error>
where
  S: PersonStore + 'static,
{
  let people = state.people.get_all().await?;
  let bytes = render_workbook(&people)?;
  let disposition = format!("attachment; filename=\"{FILE_NAME}\"");

  tracing::info!(rows = people.len(), "exported roster");
  Ok(
    (
      [
        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_owned()),
        (header::CONTENT_DISPOSITION, disposition),
      ],
      bytes,
    )
      .into_response(),
  )
}
