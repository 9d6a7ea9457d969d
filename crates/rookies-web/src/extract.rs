//! Extractors whose rejections become [`Error`]s, so malformed requests
//! pass through the failure mapping stage like any other bad argument.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::Error;

/// URL-encoded form body.
#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(Error))]
pub struct Form<T>(pub T);

/// Query string.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct Query<T>(pub T);

/// Path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);
