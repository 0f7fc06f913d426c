//! Curated image lookup by keyword.
//!
//! A fixed table of themed photographs matched against a free-text query.
//! Nothing here touches the network; a query that matches no theme simply
//! yields no images.

use serde::Serialize;

use crate::{Error, Result};

const SOURCE: &str = "Curated Collection";

struct Theme {
  keywords:   &'static [&'static str],
  photo:      &'static str,
  label:      &'static str,
  source_url: &'static str,
  author:     &'static str,
}

/// Checked in order; the first theme with any keyword in the query wins.
const THEMES: &[Theme] = &[
  Theme {
    keywords:   &["butterfly", "bird", "flower", "nature", "animal"],
    photo:      "https://images.unsplash.com/photo-1444927714506-8492d94b5ba0",
    label:      "Nature Photography",
    source_url: "https://unsplash.com/photos/butterfly",
    author:     "Nature Photographer",
  },
  Theme {
    keywords:   &["computer", "technology", "laptop", "phone", "tech"],
    photo:      "https://images.unsplash.com/photo-1518709268805-4e9042af2176",
    label:      "Technology",
    source_url: "https://unsplash.com/photos/technology",
    author:     "Tech Photographer",
  },
  Theme {
    keywords:   &["mountain", "landscape", "sunset", "ocean", "forest"],
    photo:      "https://images.unsplash.com/photo-1506905925346-21bda4d32df4",
    label:      "Landscape",
    source_url: "https://unsplash.com/photos/landscape",
    author:     "Landscape Photographer",
  },
];

// ─── Results ─────────────────────────────────────────────────────────────────

/// One image suggestion, ready for the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CuratedImage {
  pub url:        String,
  pub thumbnail:  String,
  pub title:      String,
  pub source:     &'static str,
  pub source_url: &'static str,
  pub author:     &'static str,
  pub width:      u32,
  pub height:     u32,
}

/// The answer to one image query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageResults {
  pub query:         String,
  pub total_results: usize,
  pub images:        Vec<CuratedImage>,
}

// ─── Search ──────────────────────────────────────────────────────────────────

/// Match `query` against the curated themes.
///
/// Keywords match as case-insensitive substrings, so "Tech" also matches
/// "technology". Fails with [`Error::BlankQuery`] if the query is empty
/// after trimming.
pub fn search(query: &str) -> Result<ImageResults> {
  let query = query.trim();
  if query.is_empty() {
    return Err(Error::BlankQuery);
  }

  let lower = query.to_lowercase();
  let images: Vec<CuratedImage> = THEMES
    .iter()
    .find(|theme| theme.keywords.iter().any(|k| lower.contains(k)))
    .map(|theme| vec![theme.image(query)])
    .unwrap_or_default();

  tracing::debug!(query, matches = images.len(), "curated image search");

  Ok(ImageResults {
    query: query.to_owned(),
    total_results: images.len(),
    images,
  })
}

impl Theme {
  fn image(&self, query: &str) -> CuratedImage {
    CuratedImage {
      url:        format!("{}?w=800", self.photo),
      thumbnail:  format!("{}?w=400", self.photo),
      title:      format!("{} - {}", title_case(query), self.label),
      source:     SOURCE,
      source_url: self.source_url,
      author:     self.author,
      width:      800,
      height:     600,
    }
  }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut at_word_start = true;
  for c in text.chars() {
    if c.is_alphabetic() {
      if at_word_start {
        out.extend(c.to_uppercase());
      } else {
        out.extend(c.to_lowercase());
      }
      at_word_start = false;
    } else {
      out.push(c);
      at_word_start = true;
    }
  }
  out
}
