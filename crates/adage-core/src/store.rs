//! The `QuoteStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `adage-store-sqlite`).
//! Higher layers (`adage-import`, `adage-cli`) depend on this abstraction,
//! not on any concrete backend.

use std::{collections::BTreeSet, future::Future};

use crate::quote::{CandidateQuote, NewQuote, Quote};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Optional category/author constraints applied before sampling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFilter {
  pub category: Option<String>,
  pub author:   Option<String>,
}

impl QuoteFilter {
  /// Build a filter, lowercasing each present value so comparisons are
  /// case-insensitive against the normalized rows.
  pub fn new(category: Option<&str>, author: Option<&str>) -> Self {
    Self {
      category: category.map(str::to_lowercase),
      author:   author.map(str::to_lowercase),
    }
  }

  pub fn is_unfiltered(&self) -> bool {
    self.category.is_none() && self.author.is_none()
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over an adage quote store backend.
///
/// Records are insert-only: no update or delete operation is exposed. A row
/// persists until external administrative deletion.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait QuoteStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a single quote. The store assigns the id and both timestamps.
  fn insert_quote(
    &self,
    input: NewQuote,
  ) -> impl Future<Output = Result<Quote, Self::Error>> + Send + '_;

  /// Insert a batch of candidates under their pre-assigned ids, inside one
  /// transaction committed at the end (all-or-nothing). Returns the number
  /// of rows written.
  ///
  /// Callers are responsible for filtering out candidates whose id already
  /// exists; the store does not re-check.
  fn insert_batch(
    &self,
    records: Vec<CandidateQuote>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Which of `ids` already identify rows in the store.
  fn existing_ids<'a>(
    &'a self,
    ids: &'a [i64],
  ) -> impl Future<Output = Result<BTreeSet<i64>, Self::Error>> + Send + 'a;

  /// All rows matching `filter`, in id order. An unfiltered query returns
  /// every row.
  fn quotes_matching<'a>(
    &'a self,
    filter: &'a QuoteFilter,
  ) -> impl Future<Output = Result<Vec<Quote>, Self::Error>> + Send + 'a;

  /// Distinct category values currently stored, sorted.
  fn distinct_categories(
    &self,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;

  /// Distinct author values currently stored, sorted.
  fn distinct_authors(
    &self,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;
}
