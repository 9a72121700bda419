//! Flattening a source into an id-assigned batch and resolving it against
//! the store.

use std::collections::BTreeSet;

use adage_core::{quote::CandidateQuote, store::QuoteStore};

use crate::load::SourceSet;

// ─── Resolved batch ──────────────────────────────────────────────────────────

/// The outcome of matching a flattened batch against the store.
#[derive(Debug, Clone)]
pub struct ResolvedBatch {
  /// Candidate ids that already identify rows in the store.
  pub existing_ids: BTreeSet<i64>,
  /// Every candidate, in flattened order, carrying its assigned id.
  pub records:      Vec<CandidateQuote>,
  /// The assigned ids, in the same order as `records`.
  pub record_ids:   Vec<i64>,
}

impl ResolvedBatch {
  /// Candidates safe to insert: those whose id is not already present.
  pub fn fresh(&self) -> impl Iterator<Item = &CandidateQuote> {
    self
      .records
      .iter()
      .filter(|r| !self.existing_ids.contains(&r.id))
  }
}

// ─── Flatten + resolve ───────────────────────────────────────────────────────

/// Flatten a source into a single ordered candidate list, attaching each
/// record's originating category and assigning `id = position + 1`.
///
/// Ids are never read from the source and assignment does not consult the
/// store, so a candidate id may collide with an unrelated pre-existing row.
/// Callers must skip candidates reported in [`ResolvedBatch::existing_ids`].
pub fn flatten(source: &SourceSet) -> Vec<CandidateQuote> {
  source
    .iter()
    .flat_map(|(category, records)| {
      records.iter().map(move |record| (category, record))
    })
    .enumerate()
    .map(|(position, (category, record))| CandidateQuote {
      id:       position as i64 + 1,
      category: category.clone(),
      author:   record.author.clone(),
      quote:    record.quote.clone(),
    })
    .collect()
}

/// Flatten `source` and ask `store` which candidate ids are already taken.
///
/// Deterministic for a fixed source: same input, same ids, same resolution.
pub async fn resolve<S: QuoteStore>(
  source: &SourceSet,
  store: &S,
) -> Result<ResolvedBatch, S::Error> {
  let records = flatten(source);
  let record_ids: Vec<i64> = records.iter().map(|r| r.id).collect();
  let existing_ids = store.existing_ids(&record_ids).await?;

  Ok(ResolvedBatch { existing_ids, records, record_ids })
}
