//! `adage` — a personal quote library for the terminal.
//!
//! # Usage
//!
//! ```
//! adage add --category life --quote "Carpe diem" --author Horace
//! adage import --file data/quotes.json
//! adage generate --category life
//! adage list --author horace
//! ```
//!
//! Results are printed to stdout as single-line JSON; activity and error
//! logs land under `<var>/log/`.

mod commands;
mod errlog;
mod output;

use std::path::PathBuf;

use adage_store_sqlite::SqliteStore;
use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::errlog::{ErrorLog, LogFiles};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "adage",
  about = "Store, import, and randomly retrieve quotes"
)]
struct Cli {
  /// Path to the SQLite database file.
  #[arg(long, env = "ADAGE_DB", default_value = "quotes.db")]
  db: PathBuf,

  /// Directory the `log/` subdirectory is created under.
  #[arg(long, env = "ADAGE_VAR_DIR", default_value = "var")]
  var_dir: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Import quotes from a JSON file, skipping ids already present.
  Import {
    /// Path to the JSON file containing quotes.
    #[arg(long, default_value = "data/quotes.json")]
    file: PathBuf,
  },
  /// Add a single quote.
  Add {
    /// Category of the quote.
    #[arg(long)]
    category: String,
    /// The quote text.
    #[arg(long)]
    quote: String,
    /// The author of the quote.
    #[arg(long)]
    author: String,
  },
  /// Print one random quote matching the filters.
  Generate {
    /// Category of the quote.
    #[arg(long)]
    category: Option<String>,
    /// Author of the quote.
    #[arg(long)]
    author: Option<String>,
  },
  /// Print five random quotes, drawn with replacement, matching the filters.
  List {
    /// Category of the quotes.
    #[arg(long)]
    category: Option<String>,
    /// Author of the quotes.
    #[arg(long)]
    author: Option<String>,
  },
  /// Print the distinct categories in the store.
  Categories,
  /// Print the distinct authors in the store.
  Authors,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let logs = LogFiles::bootstrap(&cli.var_dir)
    .with_context(|| format!("creating log files under {}", cli.var_dir.display()))?;

  // Route tracing to the activity log so stdout carries only results.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(logs.main_writer().context("opening activity log")?)
    .with_ansi(false)
    .init();

  let errlog = ErrorLog::new(logs.error_log_path().to_path_buf());

  // One store per invocation, dropped (and thereby closed) on every exit
  // path once the command completes.
  let store = SqliteStore::open(&cli.db)
    .await
    .with_context(|| format!("opening quote store at {}", cli.db.display()))?;

  let mut rng = rand::rng();
  let outcome = match cli.command {
    Command::Import { file } => {
      commands::import(&store, &errlog, &file).await
    }
    Command::Add { category, quote, author } => {
      commands::add(&store, &errlog, &category, &quote, &author).await
    }
    Command::Generate { category, author } => {
      commands::generate(
        &store,
        &errlog,
        category.as_deref(),
        author.as_deref(),
        &mut rng,
      )
      .await
    }
    Command::List { category, author } => {
      commands::list(
        &store,
        &errlog,
        category.as_deref(),
        author.as_deref(),
        &mut rng,
      )
      .await
    }
    Command::Categories => commands::categories(&store, &errlog).await,
    Command::Authors => commands::authors(&store, &errlog).await,
  };

  output::print_outcome(&outcome);
  Ok(())
}
