//! Handlers for the content endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/api/facts/next` | Next unseen fact for the session cookie |
//! | `POST` | `/api/news/next` | Next unseen news article for the session cookie |
//! | `GET`  | `/api/facts/{id}` | Single fact; 404 if unknown |
//! | `GET`  | `/api/news/{id}` | Single news article; 404 if unknown |

use axum::{
  Json,
  extract::{Path, State},
  http::{HeaderMap, header},
  response::{IntoResponse, Response},
};
use chrono::Utc;
use techbits_core::{ContentItem, ItemId, PoolKind};

use crate::{
  AppState,
  error::ApiError,
  session::{lock, session_id},
};

// ─── Next ─────────────────────────────────────────────────────────────────────

/// `POST /api/facts/next`
pub async fn next_fact(
  State(state): State<AppState>,
  headers: HeaderMap,
) -> Result<Response, ApiError> {
  next(&state, &headers, PoolKind::Facts)
}

/// `POST /api/news/next`
pub async fn next_news(
  State(state): State<AppState>,
  headers: HeaderMap,
) -> Result<Response, ApiError> {
  next(&state, &headers, PoolKind::News)
}

fn next(
  state: &AppState,
  headers: &HeaderMap,
  kind: PoolKind,
) -> Result<Response, ApiError> {
  let (id, slot) = state.sessions.checkout(session_id(headers), Utc::now());

  // The session lock spans the whole read-pick-write.
  let mut session = lock(&slot);
  let selection = {
    let mut rng = lock(&state.rng);
    state.selector.pick_next(kind, session.history(kind), &mut *rng)?
  };
  let item = selection.item.clone();
  *session.history_mut(kind) = selection.history;
  drop(session);

  tracing::info!(
    session = %id,
    pool = %kind,
    item = %item.id(),
    reset = selection.reset,
    "served item"
  );

  Ok(
    ([(header::SET_COOKIE, state.sessions.cookie(id))], Json(item))
      .into_response(),
  )
}

// ─── Lookup ───────────────────────────────────────────────────────────────────

/// `GET /api/facts/{id}`
pub async fn get_fact(
  State(state): State<AppState>,
  Path(id): Path<ItemId>,
) -> Result<Json<ContentItem>, ApiError> {
  Ok(Json(state.selector.lookup(PoolKind::Facts, id)?.clone()))
}

/// `GET /api/news/{id}`
pub async fn get_news(
  State(state): State<AppState>,
  Path(id): Path<ItemId>,
) -> Result<Json<ContentItem>, ApiError> {
  Ok(Json(state.selector.lookup(PoolKind::News, id)?.clone()))
}
