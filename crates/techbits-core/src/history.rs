//! Selection history — which ids a session has already seen in a pool.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{item::ItemId, pool::Pool};

/// The ids already shown to one session from one pool within the current
/// cycle.
///
/// Owned by the caller; the selector takes it by reference and hands back an
/// updated copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionHistory {
  seen: BTreeSet<ItemId>,
}

impl SelectionHistory {
  pub fn new() -> Self { Self::default() }

  pub fn len(&self) -> usize { self.seen.len() }

  pub fn is_empty(&self) -> bool { self.seen.is_empty() }

  pub fn contains(&self, id: ItemId) -> bool { self.seen.contains(&id) }

  pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
    self.seen.iter().copied()
  }

  /// Record `id` as shown. Returns `false` if it was already present.
  pub fn insert(&mut self, id: ItemId) -> bool { self.seen.insert(id) }

  pub fn clear(&mut self) { self.seen.clear(); }

  /// A copy keeping only the ids that exist in `pool`.
  pub fn restricted_to(&self, pool: &Pool) -> Self {
    self.seen.iter().copied().filter(|id| pool.contains(*id)).collect()
  }
}

impl FromIterator<ItemId> for SelectionHistory {
  fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
    Self {
      seen: iter.into_iter().collect(),
    }
  }
}

impl<const N: usize> From<[u32; N]> for SelectionHistory {
  fn from(ids: [u32; N]) -> Self { ids.into_iter().map(ItemId).collect() }
}
