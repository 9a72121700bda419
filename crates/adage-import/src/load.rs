//! Reading and normalizing a quote source file.
//!
//! A source is a JSON object whose keys are category names and whose values
//! are arrays of `{quote, author}` objects. Every object key and every
//! string value is lowercased before typed deserialization, so mixed-case
//! field names and values are accepted and arrive normalized.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

// ─── Source types ────────────────────────────────────────────────────────────

/// One entry in a source file's category list.
///
/// A source may carry an `id` field; it is parsed but never trusted —
/// candidate ids are always reassigned from flattened position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceRecord {
  pub quote:  String,
  pub author: String,
  #[serde(default)]
  pub id:     Option<i64>,
}

/// A parsed, fully-lowercased source document: category → records.
///
/// `BTreeMap` fixes the category iteration order (sorted), which keeps
/// flattening deterministic for a given source.
pub type SourceSet = BTreeMap<String, Vec<SourceRecord>>;

// ─── Loading ─────────────────────────────────────────────────────────────────

/// Load a source file, validating the path and extension before reading.
pub fn load_source(path: impl AsRef<Path>) -> Result<SourceSet> {
  let path = path.as_ref();
  if !path.exists() {
    return Err(Error::MissingPath(path.to_path_buf()));
  }
  if path.extension().and_then(|e| e.to_str()) != Some("json") {
    return Err(Error::NotJson(path.to_path_buf()));
  }

  let raw = fs::read_to_string(path)?;
  let document: Value = serde_json::from_str(&raw)?;
  if !document.is_object() {
    return Err(Error::NotAMapping);
  }

  Ok(serde_json::from_value(lowercase_tree(document))?)
}

/// Recursively lowercase every object key and every string value.
fn lowercase_tree(value: Value) -> Value {
  match value {
    Value::Object(map) => Value::Object(
      map
        .into_iter()
        .map(|(k, v)| (k.to_lowercase(), lowercase_tree(v)))
        .collect(),
    ),
    Value::Array(items) => {
      Value::Array(items.into_iter().map(lowercase_tree).collect())
    }
    Value::String(s) => Value::String(s.to_lowercase()),
    other => other,
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use super::*;

  fn write_source(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = fs::File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    path
  }

  #[test]
  fn loads_and_lowercases_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(
      &dir,
      "quotes.json",
      r#"{"Wisdom": [{"quote": "Be Kind", "author": "Anon"}]}"#,
    );

    let source = load_source(&path).unwrap();
    let records = source.get("wisdom").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].quote, "be kind");
    assert_eq!(records[0].author, "anon");
  }

  #[test]
  fn lowercases_record_keys_too() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(
      &dir,
      "quotes.json",
      r#"{"wisdom": [{"Quote": "be kind", "AUTHOR": "anon"}]}"#,
    );

    let source = load_source(&path).unwrap();
    assert_eq!(source["wisdom"][0].quote, "be kind");
    assert_eq!(source["wisdom"][0].author, "anon");
  }

  #[test]
  fn source_ids_are_parsed_but_optional() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(
      &dir,
      "quotes.json",
      r#"{"wisdom": [{"quote": "be kind", "author": "anon", "id": 42}]}"#,
    );

    let source = load_source(&path).unwrap();
    assert_eq!(source["wisdom"][0].id, Some(42));
  }

  #[test]
  fn rejects_non_json_extension_regardless_of_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(
      &dir,
      "quotes.txt",
      r#"{"wisdom": [{"quote": "be kind", "author": "anon"}]}"#,
    );

    let err = load_source(&path).unwrap_err();
    assert!(matches!(err, Error::NotJson(_)));
  }

  #[test]
  fn rejects_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_source(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::MissingPath(_)));
  }

  #[test]
  fn rejects_non_mapping_top_level() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "quotes.json", r#"["just", "a", "list"]"#);

    let err = load_source(&path).unwrap_err();
    assert!(matches!(err, Error::NotAMapping));
  }

  #[test]
  fn rejects_non_string_quote_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(
      &dir,
      "quotes.json",
      r#"{"wisdom": [{"quote": 17, "author": "anon"}]}"#,
    );

    let err = load_source(&path).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
  }
}
