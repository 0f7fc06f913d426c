//! Process wiring for the techbits server: configuration, startup checks and
//! the top-level router.

use std::{path::Path, time::Duration};

use axum::Router;
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;
use techbits_api::{AppState, SessionStore};
use techbits_core::{ContentSelector, PoolKind};
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `TECHBITS_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  /// Idle time after which a browser session and its history are dropped.
  pub session_ttl_secs: u64,
  /// Upper bound on sessions held in memory; the least recently seen one is
  /// dropped to make room.
  pub max_sessions:     usize,
  /// Fixed seed for item selection. Unset means seeded from the OS.
  pub rng_seed:         Option<u64>,
}

impl ServerConfig {
  /// Layer defaults, the optional file at `path`, then the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    let cfg: Self = config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8000_i64)?
      .set_default("session_ttl_secs", 14_i64 * 24 * 60 * 60)?
      .set_default("max_sessions", 100_000_i64)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("TECHBITS"))
      .build()?
      .try_deserialize()?;
    cfg.validate()?;
    Ok(cfg)
  }

  fn validate(&self) -> Result<(), config::ConfigError> {
    if self.session_ttl_secs == 0 {
      return Err(config::ConfigError::Message(
        "session_ttl_secs must be greater than zero".to_owned(),
      ));
    }
    if self.max_sessions == 0 {
      return Err(config::ConfigError::Message(
        "max_sessions must be greater than zero".to_owned(),
      ));
    }
    Ok(())
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn session_ttl(&self) -> Duration {
    Duration::from_secs(self.session_ttl_secs)
  }
}

// ─── Startup ──────────────────────────────────────────────────────────────────

/// Build and validate the curated content, then assemble handler state.
///
/// Fails if any pool is empty or the catalog does not validate; the server
/// must not start in that case.
pub fn build_state(config: &ServerConfig) -> techbits_core::Result<AppState> {
  let selector = ContentSelector::curated()?;
  selector.ensure_ready()?;

  tracing::info!(
    facts = selector.pool(PoolKind::Facts).len(),
    news = selector.pool(PoolKind::News).len(),
    "content pools ready"
  );

  let rng = match config.rng_seed {
    Some(seed) => {
      tracing::warn!(seed, "using a fixed selection seed");
      StdRng::seed_from_u64(seed)
    }
    None => StdRng::from_os_rng(),
  };

  let sessions = SessionStore::new(config.session_ttl(), config.max_sessions);
  Ok(AppState::new(selector, sessions, rng))
}

/// The application router with request tracing.
pub fn app(state: AppState) -> Router {
  techbits_api::router(state).layer(TraceLayer::new_for_http())
}
