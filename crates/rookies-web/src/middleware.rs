//! Failure mapping for the HTTP stack.
//!
//! Inner stages attach a [`Failure`] to the response extensions (see
//! [`crate::error::Error`] and [`panic_failure`]); [`map_failures`] then
//! replaces such a response with the mapped status and body and logs it
//! exactly once. Only request tracing sits outside it, so the trace span
//! records the final status.

use std::any::Any;

use axum::{
  Router,
  extract::Request,
  http::StatusCode,
  middleware::Next,
  response::{IntoResponse, Response},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Body sent for failures that must not leak their details.
pub const UNHANDLED_MESSAGE: &str = "An unexpected error occurred.";

/// The category of an unhandled failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
  NotFound,
  InvalidArgument,
  Unauthorized,
  Unhandled,
}

impl FailureKind {
  pub fn status(self) -> StatusCode {
    match self {
      Self::NotFound => StatusCode::NOT_FOUND,
      Self::InvalidArgument => StatusCode::BAD_REQUEST,
      Self::Unauthorized => StatusCode::UNAUTHORIZED,
      Self::Unhandled => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// Response-extension marker carried from the failing stage to
/// [`map_failures`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
  pub kind:    FailureKind,
  pub message: String,
}

impl Failure {
  pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
    Self { kind, message: message.into() }
  }

  /// Render the final response, logging it once.
  fn render(self) -> Response {
    let Failure { kind, message } = self;
    match kind {
      FailureKind::NotFound => tracing::warn!("Not found: {message}"),
      FailureKind::InvalidArgument => tracing::warn!("Bad request: {message}"),
      FailureKind::Unauthorized => tracing::warn!("Unauthorized: {message}"),
      FailureKind::Unhandled => {
        tracing::error!(error = %message, "Unhandled exception");
        return (kind.status(), UNHANDLED_MESSAGE).into_response();
      }
    }
    (kind.status(), message).into_response()
  }
}

impl IntoResponse for Failure {
  /// A provisional response carrying the mapped status; [`map_failures`]
  /// decides the final body.
  fn into_response(self) -> Response {
    let mut res = self.kind.status().into_response();
    res.extensions_mut().insert(self);
    res
  }
}

/// `axum::middleware::from_fn` stage that finalises marked responses.
/// Unmarked responses pass through untouched.
pub async fn map_failures(req: Request, next: Next) -> Response {
  let res = next.run(req).await;
  let failure = res.extensions().get::<Failure>().cloned();
  match failure {
    Some(failure) => failure.render(),
    None => res,
  }
}

/// Panic handler for `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_failure(panic: Box<dyn Any + Send + 'static>) -> Response {
  let message = if let Some(s) = panic.downcast_ref::<String>() {
    s.clone()
  } else if let Some(s) = panic.downcast_ref::<&str>() {
    (*s).to_owned()
  } else {
    "handler panicked".to_owned()
  };
  Failure::new(FailureKind::Unhandled, message).into_response()
}

/// Wrap `routes` in the full stack. Layers, outermost first: request
/// tracing, failure mapping, panic capture.
pub fn wrap(routes: Router) -> Router {
  routes
    .layer(CatchPanicLayer::custom(panic_failure))
    .layer(axum::middleware::from_fn(map_failures))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
  };
  use tower::ServiceExt as _;
  use uuid::Uuid;

  use super::*;
  use crate::{error::Error, testing::capture_logs};

  fn app() -> Router {
    wrap(
      Router::new()
        .route(
          "/missing",
          get(|| async { Err::<(), _>(Error::from(rookies_core::Error::NotFound(Uuid::nil()))) }),
        )
        .route(
          "/bad",
          get(|| async {
            Err::<(), _>(Error::from(rookies_core::Error::InvalidArgument(
              "Invalid argument".into(),
            )))
          }),
        )
        .route(
          "/invalid",
          get(|| async {
            Err::<(), _>(Error::from(rookies_core::Error::Validation(
              "First name is required.".into(),
            )))
          }),
        )
        .route(
          "/denied",
          get(|| async {
            Err::<(), _>(Error::from(rookies_core::Error::Unauthorized(
              "Access denied".into(),
            )))
          }),
        )
        .route(
          "/broken",
          get(|| async {
            Err::<(), _>(Error::from(rookies_core::Error::store(
              std::io::Error::other("disk on fire"),
            )))
          }),
        )
        .route(
          "/panic",
          get(|| async {
            if true {
              panic!("boom");
            }
            "unreachable"
          }),
        )
        .route("/ok", get(|| async { (StatusCode::ACCEPTED, "fine") }))
    )
  }

  async fn call(uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let res = app().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
  }

  #[tokio::test]
  async fn not_found_maps_to_404_with_message() {
    let (status, body) = call("/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("not found"), "body: {body}");
  }

  #[tokio::test]
  async fn invalid_argument_maps_to_400() {
    let (status, body) = call("/bad").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid argument");
  }

  #[tokio::test]
  async fn validation_maps_to_400() {
    let (status, body) = call("/invalid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("First name is required."), "body: {body}");
  }

  #[tokio::test]
  async fn unauthorized_maps_to_401() {
    let (status, body) = call("/denied").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Access denied");
  }

  #[tokio::test]
  async fn store_failure_maps_to_500_with_generic_body() {
    let (status, body) = call("/broken").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, UNHANDLED_MESSAGE);
    assert!(!body.contains("disk"));
  }

  #[tokio::test]
  async fn panic_maps_to_500() {
    let (status, body) = call("/panic").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, UNHANDLED_MESSAGE);
  }

  #[tokio::test]
  async fn unmarked_response_passes_through() {
    let (status, body) = call("/ok").await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, "fine");
  }

  #[test]
  fn failure_kinds_have_fixed_statuses() {
    assert_eq!(FailureKind::NotFound.status(), StatusCode::NOT_FOUND);
    assert_eq!(FailureKind::InvalidArgument.status(), StatusCode::BAD_REQUEST);
    assert_eq!(FailureKind::Unauthorized.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
      FailureKind::Unhandled.status(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  /// Run `uri` with a capturing subscriber; returns the status and the log.
  async fn call_logged(uri: &str) -> (StatusCode, crate::testing::LogBuffer) {
    let (logs, _guard) = capture_logs();
    let (status, _) = call(uri).await;
    (status, logs)
  }

  #[tokio::test]
  async fn client_failures_log_one_warning_and_no_error() {
    for (uri, status) in [
      ("/missing", StatusCode::NOT_FOUND),
      ("/bad", StatusCode::BAD_REQUEST),
      ("/denied", StatusCode::UNAUTHORIZED),
    ] {
      let (got, logs) = call_logged(uri).await;
      let log = logs.contents();
      assert_eq!(got, status, "{uri}");
      assert_eq!(logs.count("WARN"), 1, "{uri} log:\n{log}");
      assert_eq!(logs.count("ERROR"), 0, "{uri} log:\n{log}");
    }
  }

  #[tokio::test]
  async fn unhandled_failure_logs_error() {
    let (status, logs) = call_logged("/broken").await;
    let log = logs.contents();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(log.contains("Unhandled exception"), "log:\n{log}");
    assert_eq!(logs.count("WARN"), 0, "log:\n{log}");
  }
}
