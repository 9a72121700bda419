//! SQL schema for the adage SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are insert-only. No UPDATE or DELETE is ever issued against this
-- table; updated_at exists for the day one is.
CREATE TABLE IF NOT EXISTS quotes (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    category    TEXT NOT NULL,
    author      TEXT NOT NULL,
    quote       TEXT NOT NULL,
    created_at  TEXT NOT NULL,   -- ISO 8601 UTC; store-assigned
    updated_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS quotes_category_idx ON quotes(category);
CREATE INDEX IF NOT EXISTS quotes_author_idx   ON quotes(author);

PRAGMA user_version = 1;
";
