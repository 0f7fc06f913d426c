//! Handler for `POST /api/images/search`.
//!
//! The body is `{"query": "..."}`; a missing or blank query is a 400.

use axum::Json;
use serde::Deserialize;
use techbits_core::{ImageResults, images};

use crate::error::ApiError;

#[derive(Debug, Deserialize, Default)]
pub struct SearchBody {
  /// Free text, usually an item's `image_hint`.
  #[serde(default)]
  pub query: String,
}

/// `POST /api/images/search`
pub async fn search(
  Json(body): Json<SearchBody>,
) -> Result<Json<ImageResults>, ApiError> {
  Ok(Json(images::search(&body.query)?))
}
