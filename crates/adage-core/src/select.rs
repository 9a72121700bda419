//! Random selection over an already-filtered result set.
//!
//! The store does the filtering; these helpers only sample. Both are
//! explicit about the empty set — sampling never runs against zero rows.

use rand::{Rng, seq::IndexedRandom};

use crate::quote::Quote;

/// Fixed draw count for `list`-style retrieval.
pub const LIST_SAMPLE_SIZE: usize = 5;

/// Uniformly pick one quote, or `None` when nothing matched.
pub fn pick_one<'a, R: Rng + ?Sized>(
  quotes: &'a [Quote],
  rng: &mut R,
) -> Option<&'a Quote> {
  quotes.choose(rng)
}

/// Draw [`LIST_SAMPLE_SIZE`] quotes uniformly with replacement.
///
/// The same row may appear more than once; with fewer than five distinct
/// matches, duplicates are expected and correct. An empty input yields an
/// empty vec.
pub fn sample_with_replacement<R: Rng + ?Sized>(
  quotes: &[Quote],
  rng: &mut R,
) -> Vec<Quote> {
  if quotes.is_empty() {
    return Vec::new();
  }

  (0..LIST_SAMPLE_SIZE)
    .map(|_| quotes[rng.random_range(0..quotes.len())].clone())
    .collect()
}
