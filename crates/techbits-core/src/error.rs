//! Error types for `techbits-core`.

use thiserror::Error;

use crate::{item::ItemId, pool::PoolKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("the {0} pool has no items")]
  EmptyPool(PoolKind),

  #[error("no item {id} in the {pool} pool")]
  NotFound { pool: PoolKind, id: ItemId },

  #[error("expected a {expected} pool, got a {found} pool")]
  PoolMismatch { expected: PoolKind, found: PoolKind },

  #[error("duplicate id {id} in the {pool} pool")]
  DuplicateId { pool: PoolKind, id: ItemId },

  #[error("item {id} does not belong in the {pool} pool")]
  WrongVariant { pool: PoolKind, id: ItemId },

  #[error("item {id} in the {pool} pool has a blank {field}")]
  BlankField {
    pool:  PoolKind,
    id:    ItemId,
    field: &'static str,
  },

  #[error("image query is blank")]
  BlankQuery,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
