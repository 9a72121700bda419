//! [`SqliteStore`] — the SQLite implementation of [`QuoteStore`].

use std::{collections::BTreeSet, path::Path};

use adage_core::{
  quote::{CandidateQuote, NewQuote, Quote},
  store::{QuoteFilter, QuoteStore},
};
use chrono::Utc;

use crate::{
  Error, Result,
  encode::{RawQuote, encode_dt},
  schema::SCHEMA,
};

const QUOTE_COLUMNS: &str =
  "id, category, author, quote, created_at, updated_at";

fn map_quote_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawQuote> {
  Ok(RawQuote {
    id:         row.get(0)?,
    category:   row.get(1)?,
    author:     row.get(2)?,
    quote:      row.get(3)?,
    created_at: row.get(4)?,
    updated_at: row.get(5)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An adage quote store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Dropping
/// the last clone closes the connection, which is what scopes a store to a
/// single command invocation.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn distinct_column(&self, sql: &'static str) -> Result<Vec<String>> {
    let values = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(values)
  }
}

// ─── QuoteStore impl ─────────────────────────────────────────────────────────

impl QuoteStore for SqliteStore {
  type Error = Error;

  async fn insert_quote(&self, input: NewQuote) -> Result<Quote> {
    let now = Utc::now();
    let at_str = encode_dt(now);
    let row = input.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO quotes (category, author, quote, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?4)",
          rusqlite::params![row.category, row.author, row.quote, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Quote {
      id,
      category:   input.category,
      author:     input.author,
      quote:      input.quote,
      created_at: now,
      updated_at: now,
    })
  }

  async fn insert_batch(&self, records: Vec<CandidateQuote>) -> Result<usize> {
    let at_str = encode_dt(Utc::now());

    let inserted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        for record in &records {
          tx.execute(
            "INSERT INTO quotes (id, category, author, quote, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            rusqlite::params![
              record.id,
              record.category,
              record.author,
              record.quote,
              at_str,
            ],
          )?;
        }
        tx.commit()?;
        Ok(records.len())
      })
      .await?;

    Ok(inserted)
  }

  async fn existing_ids(&self, ids: &[i64]) -> Result<BTreeSet<i64>> {
    if ids.is_empty() {
      return Ok(BTreeSet::new());
    }
    let ids = ids.to_vec();

    let found = self
      .conn
      .call(move |conn| {
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql =
          format!("SELECT id FROM quotes WHERE id IN ({placeholders})");

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(ids.iter()), |row| row.get(0))?
          .collect::<rusqlite::Result<BTreeSet<i64>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(found)
  }

  async fn quotes_matching(&self, filter: &QuoteFilter) -> Result<Vec<Quote>> {
    let category = filter.category.clone();
    let author = filter.author.clone();

    let raws: Vec<RawQuote> = self
      .conn
      .call(move |conn| {
        // Build the WHERE clause from whichever filters are present,
        // numbering parameters as they are pushed.
        let mut conds: Vec<String> = Vec::new();
        let mut params: Vec<String> = Vec::new();
        if let Some(c) = category {
          params.push(c);
          conds.push(format!("category = ?{}", params.len()));
        }
        if let Some(a) = author {
          params.push(a);
          conds.push(format!("author = ?{}", params.len()));
        }

        let where_clause = if conds.is_empty() {
          String::new()
        } else {
          format!("WHERE {}", conds.join(" AND "))
        };

        let sql = format!(
          "SELECT {QUOTE_COLUMNS} FROM quotes {where_clause} ORDER BY id"
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params.iter()), map_quote_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawQuote::into_quote).collect()
  }

  async fn distinct_categories(&self) -> Result<Vec<String>> {
    self
      .distinct_column("SELECT DISTINCT category FROM quotes ORDER BY category")
      .await
  }

  async fn distinct_authors(&self) -> Result<Vec<String>> {
    self
      .distinct_column("SELECT DISTINCT author FROM quotes ORDER BY author")
      .await
  }
}
