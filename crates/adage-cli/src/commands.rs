//! Command handlers — one per subcommand.
//!
//! Every handler takes the store and the error log explicitly and returns a
//! structured [`Outcome`]. Store failures are caught at this boundary,
//! recorded to the error log, and converted into an error outcome; no
//! command crashes the process.

use std::path::Path;

use adage_core::{
  quote::{NewQuote, Quote},
  select,
  store::{QuoteFilter, QuoteStore},
};
use adage_import::{load_source, resolve};
use rand::Rng;

use crate::errlog::ErrorLog;

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// What a command produced; rendered to stdout by [`crate::output`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Imported { count: usize, file: String },
  Added { quote: Quote },
  Generated { quote: Quote },
  Listed { quotes: Vec<Quote> },
  Values { values: Vec<String> },
  NotFound { message: String },
  Error { message: String },
}

fn store_failure(errlog: &ErrorLog, err: impl std::fmt::Display) -> Outcome {
  let message = format!("Error occurred during database operation: {err}");
  tracing::error!("{message}");
  errlog.record(&message);
  Outcome::Error { message }
}

fn input_failure(errlog: &ErrorLog, err: impl std::fmt::Display) -> Outcome {
  let message = err.to_string();
  tracing::error!("{message}");
  errlog.record(&message);
  Outcome::Error { message }
}

// ─── Import ──────────────────────────────────────────────────────────────────

/// Import quotes from a JSON source file.
///
/// Candidates whose positionally-assigned id is already present in the store
/// are skipped; the remainder is inserted in one transaction committed at
/// the end.
pub async fn import<S: QuoteStore>(
  store: &S,
  errlog: &ErrorLog,
  file: &Path,
) -> Outcome {
  let source = match load_source(file) {
    Ok(source) => source,
    Err(e) => return input_failure(errlog, e),
  };

  let batch = match resolve(&source, store).await {
    Ok(batch) => batch,
    Err(e) => return store_failure(errlog, e),
  };

  let fresh: Vec<_> = batch.fresh().cloned().collect();
  let count = match store.insert_batch(fresh).await {
    Ok(count) => count,
    Err(e) => return store_failure(errlog, e),
  };

  tracing::info!("imported {count} quotes from {}", file.display());
  Outcome::Imported { count, file: file.display().to_string() }
}

// ─── Add ─────────────────────────────────────────────────────────────────────

/// Add a single quote; the fields are validated and normalized here.
pub async fn add<S: QuoteStore>(
  store: &S,
  errlog: &ErrorLog,
  category: &str,
  quote: &str,
  author: &str,
) -> Outcome {
  let input = match NewQuote::new(category, quote, author) {
    Ok(input) => input,
    Err(e) => return input_failure(errlog, e),
  };

  match store.insert_quote(input).await {
    Ok(quote) => {
      tracing::info!("new quote {} added", quote.id);
      Outcome::Added { quote }
    }
    Err(e) => store_failure(errlog, e),
  }
}

// ─── Retrieval ───────────────────────────────────────────────────────────────

/// Check the requested filter values against the distinct values actually in
/// the store, reporting the first unknown one.
///
/// This gates the query: an unknown value short-circuits into a not-found
/// outcome instead of running a filter guaranteed to match nothing.
async fn check_known_values<S: QuoteStore>(
  store: &S,
  errlog: &ErrorLog,
  filter: &QuoteFilter,
) -> Result<Option<Outcome>, S::Error> {
  if let Some(category) = &filter.category {
    if !store.distinct_categories().await?.contains(category) {
      let message = format!("{category} is not found in the database");
      errlog.record(&message);
      return Ok(Some(Outcome::NotFound { message }));
    }
  }

  if let Some(author) = &filter.author {
    if !store.distinct_authors().await?.contains(author) {
      let message = format!("{author} is not found in the database");
      errlog.record(&message);
      return Ok(Some(Outcome::NotFound { message }));
    }
  }

  Ok(None)
}

/// Generate one random quote matching the optional filters.
pub async fn generate<S: QuoteStore, R: Rng>(
  store: &S,
  errlog: &ErrorLog,
  category: Option<&str>,
  author: Option<&str>,
  rng: &mut R,
) -> Outcome {
  let filter = QuoteFilter::new(category, author);

  match check_known_values(store, errlog, &filter).await {
    Ok(Some(outcome)) => return outcome,
    Ok(None) => {}
    Err(e) => return store_failure(errlog, e),
  }

  let quotes = match store.quotes_matching(&filter).await {
    Ok(quotes) => quotes,
    Err(e) => return store_failure(errlog, e),
  };

  match select::pick_one(&quotes, rng) {
    Some(quote) => Outcome::Generated { quote: quote.clone() },
    None => {
      errlog.record("No quotes could be generated");
      Outcome::NotFound { message: "No quotes found.".to_owned() }
    }
  }
}

/// List five random quotes (drawn with replacement) matching the optional
/// filters.
pub async fn list<S: QuoteStore, R: Rng>(
  store: &S,
  errlog: &ErrorLog,
  category: Option<&str>,
  author: Option<&str>,
  rng: &mut R,
) -> Outcome {
  let filter = QuoteFilter::new(category, author);

  match check_known_values(store, errlog, &filter).await {
    Ok(Some(outcome)) => return outcome,
    Ok(None) => {}
    Err(e) => return store_failure(errlog, e),
  }

  let quotes = match store.quotes_matching(&filter).await {
    Ok(quotes) => quotes,
    Err(e) => return store_failure(errlog, e),
  };

  let drawn = select::sample_with_replacement(&quotes, rng);
  if drawn.is_empty() {
    errlog.record("No quotes found in the database");
    return Outcome::NotFound { message: "No quotes found.".to_owned() };
  }

  Outcome::Listed { quotes: drawn }
}

// ─── Distinct values ─────────────────────────────────────────────────────────

/// List the distinct categories currently stored.
pub async fn categories<S: QuoteStore>(store: &S, errlog: &ErrorLog) -> Outcome {
  match store.distinct_categories().await {
    Ok(values) => Outcome::Values { values },
    Err(e) => store_failure(errlog, e),
  }
}

/// List the distinct authors currently stored.
pub async fn authors<S: QuoteStore>(store: &S, errlog: &ErrorLog) -> Outcome {
  match store.distinct_authors().await {
    Ok(values) => Outcome::Values { values },
    Err(e) => store_failure(errlog, e),
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
