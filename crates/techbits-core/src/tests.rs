//! Selection behaviour against small hand-built pools and the curated
//! catalog.

use std::collections::{HashMap, HashSet};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
  ContentItem, ContentSelector, Error, ItemId, Pool, PoolKind,
  SelectionHistory,
  item::{Fact, FactCategory, NewsArticle, NewsCategory},
};

fn rng() -> StdRng { StdRng::seed_from_u64(0x7ec4_b175) }

fn fact(id: u32) -> ContentItem {
  ContentItem::Fact(Fact {
    id:          ItemId(id),
    title:       format!("Fact {id}"),
    description: format!("Description of fact {id}"),
    link:        None,
    image_hint:  "placeholder".into(),
    category:    FactCategory::ComputingMilestone,
  })
}

fn article(id: u32) -> ContentItem {
  ContentItem::News(NewsArticle {
    id:          ItemId(id),
    title:       format!("Headline {id}"),
    description: format!("Body of article {id}"),
    source_url:  format!("https://example.com/news/{id}"),
    image_hint:  "newspaper".into(),
    category:    NewsCategory::Technology,
  })
}

fn selector(fact_ids: &[u32], news_ids: &[u32]) -> ContentSelector {
  ContentSelector::new(
    Pool::new(PoolKind::Facts, fact_ids.iter().copied().map(fact).collect())
      .unwrap(),
    Pool::new(PoolKind::News, news_ids.iter().copied().map(article).collect())
      .unwrap(),
  )
  .unwrap()
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn picks_the_only_unseen_fact() {
  let sel = selector(&[1, 2, 3], &[1]);
  let picked = sel
    .pick_next(PoolKind::Facts, &SelectionHistory::from([1, 2]), &mut rng())
    .unwrap();

  assert_eq!(picked.item.id(), ItemId(3));
  assert_eq!(picked.history, SelectionHistory::from([1, 2, 3]));
  assert!(!picked.reset);
}

#[test]
fn exhausted_history_resets_to_singleton() {
  let sel = selector(&[1, 2, 3], &[1]);
  let picked = sel
    .pick_next(PoolKind::Facts, &SelectionHistory::from([1, 2, 3]), &mut rng())
    .unwrap();

  assert!(picked.reset);
  assert!([1, 2, 3].contains(&picked.item.id().0));
  assert_eq!(picked.history.len(), 1);
  assert!(picked.history.contains(picked.item.id()));
}

#[test]
fn ten_news_picks_cover_the_pool() {
  let ids: Vec<u32> = (1..=10).collect();
  let sel = selector(&[1], &ids);
  let mut rng = rng();
  let mut history = SelectionHistory::new();
  let mut returned = Vec::new();

  for _ in 0..10 {
    let picked = sel.pick_next(PoolKind::News, &history, &mut rng).unwrap();
    returned.push(picked.item.id());
    history = picked.history;
  }

  let distinct: HashSet<ItemId> = returned.iter().copied().collect();
  assert_eq!(distinct.len(), 10, "duplicates in {returned:?}");
  assert_eq!(distinct, ids.into_iter().map(ItemId).collect::<HashSet<_>>());
}

// ─── Cycle properties ────────────────────────────────────────────────────────

#[test]
fn no_repeat_until_exhausted_then_new_cycle() {
  let sel = ContentSelector::curated().unwrap();
  let n = sel.pool(PoolKind::Facts).len();
  let mut rng = rng();
  let mut history = SelectionHistory::new();
  let mut seen = HashSet::new();

  for _ in 0..n {
    let picked = sel.pick_next(PoolKind::Facts, &history, &mut rng).unwrap();
    assert!(!picked.reset);
    assert!(seen.insert(picked.item.id()), "repeat of {}", picked.item.id());
    history = picked.history;
  }
  assert_eq!(history.len(), n);

  let next = sel.pick_next(PoolKind::Facts, &history, &mut rng).unwrap();
  assert!(next.reset);
  assert_eq!(next.history.len(), 1);
}

#[test]
fn history_grows_by_exactly_the_chosen_id() {
  let sel = selector(&[1, 2, 3, 4, 5, 6], &[1]);
  let mut rng = rng();
  let mut history = SelectionHistory::from([2, 5]);

  for _ in 0..4 {
    let picked = sel.pick_next(PoolKind::Facts, &history, &mut rng).unwrap();
    assert!(!history.contains(picked.item.id()));
    let mut expected = history.clone();
    expected.insert(picked.item.id());
    assert_eq!(picked.history, expected);
    history = picked.history;
  }
}

#[test]
fn foreign_ids_are_ignored() {
  let sel = selector(&[1, 2, 3], &[1]);
  let history = SelectionHistory::from([1, 2, 99, 1000]);
  let picked = sel.pick_next(PoolKind::Facts, &history, &mut rng()).unwrap();

  assert_eq!(picked.item.id(), ItemId(3));
  assert_eq!(picked.history, SelectionHistory::from([1, 2, 3]));
  assert!(!picked.reset);
}

#[test]
fn pools_keep_separate_histories() {
  let sel = selector(&[1, 2], &[1, 2]);
  let facts_seen = SelectionHistory::from([1]);
  let picked = sel.pick_next(PoolKind::News, &facts_seen, &mut rng()).unwrap();

  // The same numeric id means a different item in another pool, so this is
  // an ordinary pick with no reset.
  assert!(matches!(picked.item, ContentItem::News(_)));
  assert!(!picked.reset);
}

#[test]
fn selection_is_uniform_over_eligible_items() {
  let sel = selector(&[1, 2, 3, 4, 5], &[1]);
  let history = SelectionHistory::from([1]);
  let mut rng = rng();
  let trials = 40_000;
  let mut counts: HashMap<ItemId, u32> = HashMap::new();

  for _ in 0..trials {
    let picked = sel.pick_next(PoolKind::Facts, &history, &mut rng).unwrap();
    *counts.entry(picked.item.id()).or_default() += 1;
  }

  assert!(!counts.contains_key(&ItemId(1)));
  assert_eq!(counts.len(), 4);
  let expected = trials as f64 / 4.0;
  for (id, count) in counts {
    let deviation = (count as f64 - expected).abs() / expected;
    assert!(deviation < 0.05, "item {id} picked {count} times");
  }
}

#[test]
fn same_seed_gives_same_sequence() {
  let sel = ContentSelector::curated().unwrap();
  let run = |seed: u64| {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut history = SelectionHistory::new();
    let mut ids = Vec::new();
    for _ in 0..8 {
      let picked = sel.pick_next(PoolKind::News, &history, &mut rng).unwrap();
      ids.push(picked.item.id());
      history = picked.history;
    }
    ids
  };
  assert_eq!(run(42), run(42));
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn empty_pool_always_fails() {
  let sel = ContentSelector::new(
    Pool::empty(PoolKind::Facts),
    Pool::new(PoolKind::News, vec![article(1)]).unwrap(),
  )
  .unwrap();
  let mut rng = rng();

  for history in [SelectionHistory::new(), SelectionHistory::from([1, 2])] {
    let err = sel.pick_next(PoolKind::Facts, &history, &mut rng).unwrap_err();
    assert_eq!(err, Error::EmptyPool(PoolKind::Facts));
  }
  assert_eq!(sel.ensure_ready(), Err(Error::EmptyPool(PoolKind::Facts)));
}

#[test]
fn curated_catalog_is_ready() {
  let sel = ContentSelector::curated().unwrap();
  assert!(sel.ensure_ready().is_ok());
}

#[test]
fn lookup_finds_and_misses() {
  let sel = selector(&[1, 2, 3], &[7]);
  assert_eq!(sel.lookup(PoolKind::News, ItemId(7)).unwrap().id(), ItemId(7));
  assert_eq!(
    sel.lookup(PoolKind::Facts, ItemId(7)),
    Err(Error::NotFound {
      pool: PoolKind::Facts,
      id:   ItemId(7),
    })
  );
}

#[test]
fn pool_rejects_bad_content() {
  assert_eq!(
    Pool::new(PoolKind::Facts, vec![fact(1), fact(1)]).unwrap_err(),
    Error::DuplicateId {
      pool: PoolKind::Facts,
      id:   ItemId(1),
    }
  );
  assert_eq!(
    Pool::new(PoolKind::Facts, vec![fact(1), article(2)]).unwrap_err(),
    Error::WrongVariant {
      pool: PoolKind::Facts,
      id:   ItemId(2),
    }
  );

  let mut blank = fact(3);
  if let ContentItem::Fact(f) = &mut blank {
    f.title = "   ".into();
  }
  assert_eq!(
    Pool::new(PoolKind::Facts, vec![blank]).unwrap_err(),
    Error::BlankField {
      pool:  PoolKind::Facts,
      id:    ItemId(3),
      field: "title",
    }
  );
}

#[test]
fn selector_rejects_swapped_pools() {
  let err = ContentSelector::new(
    Pool::empty(PoolKind::News),
    Pool::empty(PoolKind::Facts),
  )
  .unwrap_err();
  assert_eq!(
    err,
    Error::PoolMismatch {
      expected: PoolKind::Facts,
      found:    PoolKind::News,
    }
  );
}

// ─── Serialisation ───────────────────────────────────────────────────────────

#[test]
fn items_serialise_with_kind_tag() {
  let json = serde_json::to_value(fact(4)).unwrap();
  assert_eq!(json["kind"], "fact");
  assert_eq!(json["id"], 4);
  assert_eq!(json["category"], "computing_milestone");
  assert!(json["link"].is_null());

  let json = serde_json::to_value(article(9)).unwrap();
  assert_eq!(json["kind"], "news");
  assert_eq!(json["source_url"], "https://example.com/news/9");
}
