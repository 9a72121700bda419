//! Error types for `adage-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("category must not be empty")]
  EmptyCategory,

  #[error("quote text must not be empty")]
  EmptyQuote,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
