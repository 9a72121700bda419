//! JSON quote-source loading and import-batch resolution for adage.
//!
//! Pipeline:
//!   path on disk
//!     └─ load_source()   → SourceSet (validated, lowercased)
//!          └─ flatten()  → Vec<CandidateQuote> (1-based positional ids)
//!               └─ resolve() → ResolvedBatch (existing ids marked)
//!
//! Pure apart from the initial file read; no database dependency — the
//! resolver goes through [`adage_core::store::QuoteStore`].

pub mod batch;
pub mod error;
pub mod load;

pub use batch::{ResolvedBatch, flatten, resolve};
pub use error::{Error, Result};
pub use load::{SourceRecord, SourceSet, load_source};
