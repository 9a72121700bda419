//! Quote record types — the fundamental unit of the adage store.
//!
//! A quote is normalized (lowercased) exactly once, when it enters the
//! system through `add` or an import batch. Reads never re-apply
//! normalization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A persisted quote row. `id` and both timestamps are assigned by the
/// store; `updated_at` equals `created_at` for as long as no update
/// operation exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
  pub id:         i64,
  pub category:   String,
  pub author:     String,
  pub quote:      String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Input for a single quote, before the store assigns identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
  pub category: String,
  pub author:   String,
  pub quote:    String,
}

impl NewQuote {
  /// Validate and normalize the user-supplied fields.
  ///
  /// The category and the quote text must be non-blank; the author may be
  /// empty (unattributed quotes are allowed). All three fields are
  /// lowercased here.
  pub fn new(category: &str, quote: &str, author: &str) -> Result<Self> {
    if category.trim().is_empty() {
      return Err(Error::EmptyCategory);
    }
    if quote.trim().is_empty() {
      return Err(Error::EmptyQuote);
    }

    Ok(Self {
      category: category.to_lowercase(),
      author:   author.to_lowercase(),
      quote:    quote.to_lowercase(),
    })
  }
}

/// One flattened import candidate: the record fields plus the id assigned
/// from its position in the batch.
///
/// Candidates bypass [`NewQuote::new`] — import sources are normalized by
/// the loader and are not subject to the blank-field checks `add` applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateQuote {
  pub id:       i64,
  pub category: String,
  pub author:   String,
  pub quote:    String,
}
