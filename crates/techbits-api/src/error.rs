//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Clients only ever see a fixed message per status; the underlying error
//! goes to the log.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

const RETRY_MESSAGE: &str =
  "Sorry, we couldn't load content right now. Please try again later.";
const NOT_FOUND_MESSAGE: &str = "Item not found.";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(#[source] techbits_core::Error),

  /// The request itself was unusable; the message is safe to show.
  #[error("bad request: {0}")]
  BadRequest(&'static str),

  /// A pool had nothing to serve.
  #[error("content unavailable: {0}")]
  Unavailable(#[source] techbits_core::Error),

  #[error("content error: {0}")]
  Content(#[source] techbits_core::Error),
}

impl From<techbits_core::Error> for ApiError {
  fn from(e: techbits_core::Error) -> Self {
    match e {
      techbits_core::Error::NotFound { .. } => Self::NotFound(e),
      techbits_core::Error::BlankQuery => {
        Self::BadRequest("Please enter a search query.")
      }
      techbits_core::Error::EmptyPool(_) => Self::Unavailable(e),
      other => Self::Content(other),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(e) => {
        tracing::debug!(error = %e, "lookup miss");
        (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_owned())
      }
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, (*m).to_owned()),
      ApiError::Unavailable(e) => {
        tracing::error!(error = %e, "no content to serve");
        (StatusCode::SERVICE_UNAVAILABLE, RETRY_MESSAGE.to_owned())
      }
      ApiError::Content(e) => {
        tracing::error!(error = %e, "content selection failed");
        (StatusCode::INTERNAL_SERVER_ERROR, RETRY_MESSAGE.to_owned())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
