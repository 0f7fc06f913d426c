//! The content selector: picks an unseen item from a pool.
//!
//! Selection is a pure function of the pool, the caller-supplied history and
//! the injected random source. The selector owns no per-session state; the
//! caller stores the returned history and passes it back on the next call.

use rand::Rng;
use strum::IntoEnumIterator;

use crate::{
  Error, Result,
  catalog,
  history::SelectionHistory,
  item::{ContentItem, ItemId},
  pool::{Pool, PoolKind},
};

/// The outcome of [`ContentSelector::pick_next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
  pub item:    &'a ContentItem,
  /// The history the caller should store for the next request.
  pub history: SelectionHistory,
  /// `true` if the input history covered the whole pool and was cleared
  /// before choosing.
  pub reset:   bool,
}

/// Read-only owner of the facts and news pools.
#[derive(Debug, Clone)]
pub struct ContentSelector {
  facts: Pool,
  news:  Pool,
}

impl ContentSelector {
  /// Build a selector from one pool of each kind.
  pub fn new(facts: Pool, news: Pool) -> Result<Self> {
    for (expected, pool) in [(PoolKind::Facts, &facts), (PoolKind::News, &news)] {
      if pool.kind() != expected {
        return Err(Error::PoolMismatch {
          expected,
          found: pool.kind(),
        });
      }
    }
    Ok(Self { facts, news })
  }

  /// Build a selector over the built-in curated catalog.
  pub fn curated() -> Result<Self> {
    Self::new(
      Pool::new(PoolKind::Facts, catalog::facts())?,
      Pool::new(PoolKind::News, catalog::news())?,
    )
  }

  pub fn pool(&self, kind: PoolKind) -> &Pool {
    match kind {
      PoolKind::Facts => &self.facts,
      PoolKind::News => &self.news,
    }
  }

  /// Startup check: every pool must have at least one item.
  pub fn ensure_ready(&self) -> Result<()> {
    match PoolKind::iter().find(|kind| self.pool(*kind).is_empty()) {
      Some(kind) => Err(Error::EmptyPool(kind)),
      None => Ok(()),
    }
  }

  /// Choose one item from `kind` that is not in `history`.
  ///
  /// Ids in `history` that do not belong to the pool are ignored. If the
  /// history already covers the whole pool it is cleared first, starting a
  /// new cycle. The choice is uniform over the eligible items.
  pub fn pick_next<R: Rng>(
    &self,
    kind: PoolKind,
    history: &SelectionHistory,
    rng: &mut R,
  ) -> Result<Selection<'_>> {
    let pool = self.pool(kind);
    let mut history = history.restricted_to(pool);

    let mut available: Vec<&ContentItem> = pool
      .items()
      .iter()
      .filter(|item| !history.contains(item.id()))
      .collect();

    let reset = available.is_empty();
    if reset {
      history.clear();
      available = pool.items().iter().collect();
    }
    if available.is_empty() {
      return Err(Error::EmptyPool(kind));
    }

    let item = available[rng.random_range(0..available.len())];
    history.insert(item.id());

    if reset {
      tracing::debug!(pool = %kind, "selection history exhausted, starting new cycle");
    }

    Ok(Selection {
      item,
      history,
      reset,
    })
  }

  /// Resolve an item by id.
  pub fn lookup(&self, kind: PoolKind, id: ItemId) -> Result<&ContentItem> {
    self
      .pool(kind)
      .get(id)
      .ok_or(Error::NotFound { pool: kind, id })
  }
}
