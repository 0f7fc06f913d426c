//! Cookie-identified sessions holding one selection history per pool.
//!
//! The store hands out each session behind its own mutex. Handlers hold that
//! lock across the read-pick-write of a history so concurrent requests from
//! the same browser serialise instead of picking from a stale history.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex, MutexGuard, PoisonError},
  time::Duration,
};

use axum::http::{HeaderMap, header};
use chrono::{DateTime, TimeDelta, Utc};
use techbits_core::{PoolKind, SelectionHistory};
use uuid::Uuid;

/// Name of the cookie carrying the session id.
pub const COOKIE_NAME: &str = "techbits_session";

/// Per-browser state: what has been shown from each pool this cycle.
#[derive(Debug, Default)]
pub struct Session {
  facts: SelectionHistory,
  news:  SelectionHistory,
}

impl Session {
  pub fn history(&self, kind: PoolKind) -> &SelectionHistory {
    match kind {
      PoolKind::Facts => &self.facts,
      PoolKind::News => &self.news,
    }
  }

  pub fn history_mut(&mut self, kind: PoolKind) -> &mut SelectionHistory {
    match kind {
      PoolKind::Facts => &mut self.facts,
      PoolKind::News => &mut self.news,
    }
  }
}

struct Slot {
  last_seen: DateTime<Utc>,
  session:   Arc<Mutex<Session>>,
}

#[derive(Default)]
struct Table {
  slots:      HashMap<Uuid, Slot>,
  last_sweep: Option<DateTime<Utc>>,
}

impl Table {
  /// Drop every slot idle for longer than `ttl`.
  fn sweep(&mut self, now: DateTime<Utc>, ttl: TimeDelta) {
    let before = self.slots.len();
    self.slots.retain(|_, slot| now - slot.last_seen <= ttl);
    self.last_sweep = Some(now);
    let purged = before - self.slots.len();
    if purged > 0 {
      tracing::debug!(purged, "expired idle sessions");
    }
  }

  /// Drop the least recently seen slot.
  fn evict_oldest(&mut self) {
    let oldest = self
      .slots
      .iter()
      .min_by_key(|(_, slot)| slot.last_seen)
      .map(|(id, _)| *id);
    if let Some(id) = oldest {
      self.slots.remove(&id);
      tracing::debug!(session = %id, "evicted session at capacity");
    }
  }
}

/// In-memory session table with idle expiry and a hard size cap.
pub struct SessionStore {
  ttl:      TimeDelta,
  capacity: usize,
  table:    Mutex<Table>,
}

impl SessionStore {
  /// Expired sessions are swept at most this often.
  const SWEEP_INTERVAL_SECS: i64 = 60;

  /// A store holding at most `capacity` sessions, each living `ttl` past
  /// its last request.
  pub fn new(ttl: Duration, capacity: usize) -> Self {
    Self {
      ttl:      TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
      capacity: capacity.max(1),
      table:    Mutex::new(Table::default()),
    }
  }

  /// Return the live session for `requested`, or start a new one.
  ///
  /// Unknown or expired ids are never adopted; the caller gets a fresh id to
  /// hand back in the cookie. Expired sessions are purged at most once per
  /// sweep interval, and when the store is full the least recently seen
  /// session makes room.
  pub fn checkout(
    &self,
    requested: Option<Uuid>,
    now: DateTime<Utc>,
  ) -> (Uuid, Arc<Mutex<Session>>) {
    let mut table = lock(&self.table);

    let sweep_due = table.last_sweep.is_none_or(|last| {
      now - last >= TimeDelta::seconds(Self::SWEEP_INTERVAL_SECS)
    });
    if sweep_due {
      table.sweep(now, self.ttl);
    }

    let live = requested.filter(|id| {
      table
        .slots
        .get(id)
        .is_some_and(|slot| now - slot.last_seen <= self.ttl)
    });

    let id = match live {
      Some(id) => id,
      None => {
        if let Some(stale) = requested {
          table.slots.remove(&stale);
        }
        if table.slots.len() >= self.capacity {
          table.sweep(now, self.ttl);
        }
        if table.slots.len() >= self.capacity {
          table.evict_oldest();
        }
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, "starting session");
        id
      }
    };

    let slot = table.slots.entry(id).or_insert_with(|| Slot {
      last_seen: now,
      session:   Arc::default(),
    });
    slot.last_seen = now;
    (id, Arc::clone(&slot.session))
  }

  /// Number of sessions currently held, expired or not.
  pub fn len(&self) -> usize { lock(&self.table).slots.len() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }

  /// `Set-Cookie` value binding the browser to `id` for the TTL.
  pub fn cookie(&self, id: Uuid) -> String {
    format!(
      "{COOKIE_NAME}={id}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
      self.ttl.num_seconds()
    )
  }
}

/// Extract the session id from the request's `Cookie` headers, if present
/// and well-formed.
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
  headers
    .get_all(header::COOKIE)
    .iter()
    .filter_map(|value| value.to_str().ok())
    .flat_map(|value| value.split(';'))
    .filter_map(|pair| pair.trim().split_once('='))
    .find(|(name, _)| *name == COOKIE_NAME)
    .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// Lock a mutex, recovering the guard if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
  mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
