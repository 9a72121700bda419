//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings.

use adage_core::quote::Quote;
use chrono::{DateTime, Utc};

use crate::{Error, Result};

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

/// A `quotes` row as raw column values, before timestamp parsing.
pub struct RawQuote {
  pub id:         i64,
  pub category:   String,
  pub author:     String,
  pub quote:      String,
  pub created_at: String,
  pub updated_at: String,
}

impl RawQuote {
  pub fn into_quote(self) -> Result<Quote> {
    Ok(Quote {
      id:         self.id,
      category:   self.category,
      author:     self.author,
      quote:      self.quote,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}
