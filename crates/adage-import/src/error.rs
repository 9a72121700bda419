//! Error types for `adage-import`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The source path does not exist on disk.
  #[error("source file not found: {}", .0.display())]
  MissingPath(PathBuf),

  /// Only `.json` source files are accepted.
  #[error("invalid source format (only .json files are allowed): {}", .0.display())]
  NotJson(PathBuf),

  /// The top level of the document was not an object of
  /// category → quote list.
  #[error("source document must be a mapping of category to quote list")]
  NotAMapping,

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
