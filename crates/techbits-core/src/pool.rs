//! Pools — fixed, ordered collections of items of one variant.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{
  Error, Result,
  item::{ContentItem, ItemId},
};

/// Which of the two content pools an operation targets.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PoolKind {
  Facts,
  News,
}

impl PoolKind {
  /// Whether `item` is of the variant this pool holds.
  pub fn admits(self, item: &ContentItem) -> bool {
    matches!(
      (self, item),
      (Self::Facts, ContentItem::Fact(_)) | (Self::News, ContentItem::News(_))
    )
  }
}

/// An immutable, validated sequence of items belonging to one [`PoolKind`].
///
/// A pool may be empty; emptiness is a configuration error reported by
/// [`crate::selector::ContentSelector::ensure_ready`] and by selection itself,
/// not by construction.
#[derive(Debug, Clone)]
pub struct Pool {
  kind:  PoolKind,
  items: Vec<ContentItem>,
}

impl Pool {
  /// Validate `items` and build a pool.
  ///
  /// Rejects items of the wrong variant, duplicate ids, and blank titles or
  /// descriptions.
  pub fn new(kind: PoolKind, items: Vec<ContentItem>) -> Result<Self> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
      let id = item.id();
      if !kind.admits(item) {
        return Err(Error::WrongVariant { pool: kind, id });
      }
      if !seen.insert(id) {
        return Err(Error::DuplicateId { pool: kind, id });
      }
      if item.title().trim().is_empty() {
        return Err(Error::BlankField { pool: kind, id, field: "title" });
      }
      if item.description().trim().is_empty() {
        return Err(Error::BlankField {
          pool: kind,
          id,
          field: "description",
        });
      }
    }
    Ok(Self { kind, items })
  }

  /// An empty pool of the given kind.
  pub fn empty(kind: PoolKind) -> Self {
    Self {
      kind,
      items: Vec::new(),
    }
  }

  pub fn kind(&self) -> PoolKind { self.kind }

  pub fn items(&self) -> &[ContentItem] { &self.items }

  pub fn len(&self) -> usize { self.items.len() }

  pub fn is_empty(&self) -> bool { self.items.is_empty() }

  pub fn contains(&self, id: ItemId) -> bool {
    self.items.iter().any(|item| item.id() == id)
  }

  /// All ids in authoring order.
  pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
    self.items.iter().map(ContentItem::id)
  }

  pub fn get(&self, id: ItemId) -> Option<&ContentItem> {
    self.items.iter().find(|item| item.id() == id)
  }
}
