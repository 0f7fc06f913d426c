//! Content selection for techbits.
//!
//! Holds the curated facts and news pools and picks items a session has not
//! seen yet. Also matches image hints against a small curated photo table.
//! This crate has no HTTP or async dependencies; session storage lives with
//! the caller.

pub mod catalog;
pub mod error;
pub mod history;
pub mod images;
pub mod item;
pub mod pool;
pub mod selector;

pub use error::{Error, Result};
pub use history::SelectionHistory;
pub use images::{CuratedImage, ImageResults};
pub use item::{ContentItem, ItemId};
pub use pool::{Pool, PoolKind};
pub use selector::{ContentSelector, Selection};

#[cfg(test)]
mod tests;
