//! Transport-level error type and [`axum::response::IntoResponse`]
//! implementation.
//!
//! GraphQL-level failures never reach this type; they travel inside a 200
//! response's `errors` list. This covers requests the executor never sees.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use sherlock_graphql::{ExecutionError, ExecutionResult};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
    };
    let body = ExecutionResult::from_errors([ExecutionError::new(self.to_string())]);
    (status, Json(body)).into_response()
  }
}
