//! Integration tests for `SqliteStore` against an in-memory database.

use std::collections::BTreeSet;

use adage_core::{
  quote::{CandidateQuote, NewQuote},
  store::{QuoteFilter, QuoteStore},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_quote(category: &str, quote: &str, author: &str) -> NewQuote {
  NewQuote::new(category, quote, author).expect("valid quote input")
}

fn candidate(id: i64, category: &str, quote: &str, author: &str) -> CandidateQuote {
  CandidateQuote {
    id,
    category: category.into(),
    author:   author.into(),
    quote:    quote.into(),
  }
}

// ─── Single inserts ──────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_id_and_timestamps() {
  let s = store().await;

  let quote = s
    .insert_quote(new_quote("life", "Carpe diem", "Horace"))
    .await
    .unwrap();

  assert_eq!(quote.id, 1);
  assert_eq!(quote.category, "life");
  assert_eq!(quote.quote, "carpe diem");
  assert_eq!(quote.author, "horace");
  assert_eq!(quote.created_at, quote.updated_at);

  let rows = s.quotes_matching(&QuoteFilter::default()).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0], quote);
}

#[tokio::test]
async fn insert_assigns_sequential_ids() {
  let s = store().await;

  let first = s
    .insert_quote(new_quote("wisdom", "be kind", "anon"))
    .await
    .unwrap();
  let second = s
    .insert_quote(new_quote("wisdom", "know thyself", "socrates"))
    .await
    .unwrap();

  assert_eq!(first.id, 1);
  assert_eq!(second.id, 2);
}

// ─── Batch inserts ───────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_batch_writes_all_and_reports_count() {
  let s = store().await;

  let count = s
    .insert_batch(vec![
      candidate(1, "wisdom", "be kind", "anon"),
      candidate(2, "life", "carpe diem", "horace"),
    ])
    .await
    .unwrap();
  assert_eq!(count, 2);

  let rows = s.quotes_matching(&QuoteFilter::default()).await.unwrap();
  assert_eq!(rows.len(), 2);
  assert_eq!(rows[0].id, 1);
  assert_eq!(rows[1].id, 2);
}

#[tokio::test]
async fn insert_batch_keeps_candidate_ids() {
  let s = store().await;

  s.insert_batch(vec![candidate(7, "wisdom", "be kind", "anon")])
    .await
    .unwrap();

  let existing = s.existing_ids(&[6, 7, 8]).await.unwrap();
  assert_eq!(existing, BTreeSet::from([7]));
}

#[tokio::test]
async fn insert_batch_empty_is_a_noop() {
  let s = store().await;
  let count = s.insert_batch(Vec::new()).await.unwrap();
  assert_eq!(count, 0);
}

#[tokio::test]
async fn insert_batch_is_all_or_nothing() {
  let s = store().await;
  s.insert_batch(vec![candidate(2, "wisdom", "be kind", "anon")])
    .await
    .unwrap();

  // The second candidate collides with the pre-existing id 2, so the whole
  // transaction must roll back.
  let result = s
    .insert_batch(vec![
      candidate(1, "life", "carpe diem", "horace"),
      candidate(2, "life", "memento mori", "anon"),
    ])
    .await;
  assert!(result.is_err());

  let rows = s.quotes_matching(&QuoteFilter::default()).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].id, 2);
}

// ─── Existing ids ────────────────────────────────────────────────────────────

#[tokio::test]
async fn existing_ids_empty_input_skips_query() {
  let s = store().await;
  let existing = s.existing_ids(&[]).await.unwrap();
  assert!(existing.is_empty());
}

#[tokio::test]
async fn existing_ids_returns_only_stored_subset() {
  let s = store().await;
  s.insert_batch(vec![
    candidate(1, "wisdom", "be kind", "anon"),
    candidate(3, "life", "carpe diem", "horace"),
  ])
  .await
  .unwrap();

  let existing = s.existing_ids(&[1, 2, 3, 4]).await.unwrap();
  assert_eq!(existing, BTreeSet::from([1, 3]));
}

// ─── Filtered queries ────────────────────────────────────────────────────────

async fn seeded() -> SqliteStore {
  let s = store().await;
  s.insert_batch(vec![
    candidate(1, "wisdom", "be kind", "anon"),
    candidate(2, "wisdom", "know thyself", "socrates"),
    candidate(3, "life", "carpe diem", "horace"),
  ])
  .await
  .unwrap();
  s
}

#[tokio::test]
async fn quotes_matching_unfiltered_returns_everything_in_id_order() {
  let s = seeded().await;

  let rows = s.quotes_matching(&QuoteFilter::default()).await.unwrap();
  assert_eq!(rows.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[tokio::test]
async fn quotes_matching_by_category() {
  let s = seeded().await;

  let rows = s
    .quotes_matching(&QuoteFilter::new(Some("wisdom"), None))
    .await
    .unwrap();
  assert_eq!(rows.len(), 2);
  assert!(rows.iter().all(|q| q.category == "wisdom"));
}

#[tokio::test]
async fn quotes_matching_by_author() {
  let s = seeded().await;

  let rows = s
    .quotes_matching(&QuoteFilter::new(None, Some("horace")))
    .await
    .unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].quote, "carpe diem");
}

#[tokio::test]
async fn quotes_matching_by_category_and_author() {
  let s = seeded().await;

  let rows = s
    .quotes_matching(&QuoteFilter::new(Some("wisdom"), Some("socrates")))
    .await
    .unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].quote, "know thyself");

  let none = s
    .quotes_matching(&QuoteFilter::new(Some("life"), Some("socrates")))
    .await
    .unwrap();
  assert!(none.is_empty());
}

#[tokio::test]
async fn quotes_matching_filter_is_case_insensitive_via_normalization() {
  let s = seeded().await;

  let rows = s
    .quotes_matching(&QuoteFilter::new(Some("WISDOM"), None))
    .await
    .unwrap();
  assert_eq!(rows.len(), 2);
}

// ─── Distinct values ─────────────────────────────────────────────────────────

#[tokio::test]
async fn distinct_categories_sorted_and_deduplicated() {
  let s = seeded().await;

  let categories = s.distinct_categories().await.unwrap();
  assert_eq!(categories, vec!["life", "wisdom"]);
}

#[tokio::test]
async fn distinct_authors_sorted_and_deduplicated() {
  let s = seeded().await;

  let authors = s.distinct_authors().await.unwrap();
  assert_eq!(authors, vec!["anon", "horace", "socrates"]);
}

#[tokio::test]
async fn distinct_values_empty_store() {
  let s = store().await;
  assert!(s.distinct_categories().await.unwrap().is_empty());
  assert!(s.distinct_authors().await.unwrap().is_empty());
}
