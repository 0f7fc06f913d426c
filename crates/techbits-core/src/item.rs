//! Content items — the records served to the browser.
//!
//! Items are authored by hand, compiled into the binary and never mutated.
//! Each item belongs to exactly one pool; the variant of [`ContentItem`] must
//! match the pool it is placed in.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Identity ────────────────────────────────────────────────────────────────

/// Stable identifier of an item, unique within its pool.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

impl From<u32> for ItemId {
  fn from(value: u32) -> Self { Self(value) }
}

// ─── Categories ──────────────────────────────────────────────────────────────

/// Topic grouping for facts. Display-only; selection ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactCategory {
  ProgrammingLanguage,
  ComputerScientist,
  AiTechnology,
  SoftwareCompany,
  ComputingMilestone,
}

/// Topic grouping for news articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsCategory {
  Technology,
  Policy,
}

// ─── Variants ────────────────────────────────────────────────────────────────

/// A curated fact about computing history or technology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
  pub id:          ItemId,
  pub title:       String,
  pub description: String,
  /// Reference article associated by topic, usually an encyclopedia entry.
  pub link:        Option<String>,
  /// Free text the presentation layer uses to look up an illustration.
  pub image_hint:  String,
  pub category:    FactCategory,
}

/// A curated news article pointing at an external source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
  pub id:          ItemId,
  pub title:       String,
  pub description: String,
  pub source_url:  String,
  pub image_hint:  String,
  pub category:    NewsCategory,
}

/// A single servable record. The `kind` tag is part of the JSON payload so
/// the browser can render either variant from one code path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentItem {
  Fact(Fact),
  News(NewsArticle),
}

impl ContentItem {
  pub fn id(&self) -> ItemId {
    match self {
      Self::Fact(f) => f.id,
      Self::News(n) => n.id,
    }
  }

  pub fn title(&self) -> &str {
    match self {
      Self::Fact(f) => &f.title,
      Self::News(n) => &n.title,
    }
  }

  pub fn description(&self) -> &str {
    match self {
      Self::Fact(f) => &f.description,
      Self::News(n) => &n.description,
    }
  }

  pub fn image_hint(&self) -> &str {
    match self {
      Self::Fact(f) => &f.image_hint,
      Self::News(n) => &n.image_hint,
    }
  }
}

impl From<Fact> for ContentItem {
  fn from(fact: Fact) -> Self { Self::Fact(fact) }
}

impl From<NewsArticle> for ContentItem {
  fn from(article: NewsArticle) -> Self { Self::News(article) }
}
