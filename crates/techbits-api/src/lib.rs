//! HTTP surface for techbits.
//!
//! Exposes an axum [`Router`] serving the browser page, the JSON content
//! endpoints and the curated image search. Sessions are identified by a
//! cookie and held in memory; the selector itself is shared read-only.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = techbits_api::router(state).layer(TraceLayer::new_for_http());
//! ```

pub mod content;
pub mod error;
pub mod images;
pub mod page;
pub mod session;

use std::sync::{Arc, Mutex};

use axum::{
  Router,
  routing::{get, post},
};
use rand::rngs::StdRng;
use techbits_core::ContentSelector;

pub use error::ApiError;
pub use session::SessionStore;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
  pub selector: Arc<ContentSelector>,
  pub sessions: Arc<SessionStore>,
  /// Source of randomness for every pick; seeded from config when set.
  pub rng:      Arc<Mutex<StdRng>>,
}

impl AppState {
  pub fn new(
    selector: ContentSelector,
    sessions: SessionStore,
    rng: StdRng,
  ) -> Self {
    Self {
      selector: Arc::new(selector),
      sessions: Arc::new(sessions),
      rng:      Arc::new(Mutex::new(rng)),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application router.
pub fn router(state: AppState) -> Router<()> {
  Router::new()
    .route("/", get(page::index))
    // Next unseen item
    .route("/api/facts/next", post(content::next_fact))
    .route("/api/news/next", post(content::next_news))
    // Lookup
    .route("/api/facts/{id}", get(content::get_fact))
    .route("/api/news/{id}", get(content::get_news))
    // Images
    .route("/api/images/search", post(images::search))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
