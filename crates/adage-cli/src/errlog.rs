//! Log-file bootstrap and the injected error-log capability.
//!
//! Two files live under `<var>/log/`: the main activity log, written by the
//! tracing subscriber, and the error log, an append-only record of failed
//! operations. The [`ErrorLog`] value is passed explicitly into each command
//! handler — no module-level logger state.

use std::{
  fs::{self, File, OpenOptions},
  io::Write as _,
  path::{Path, PathBuf},
  sync::Arc,
};

use chrono::Utc;

/// File name of the main activity log.
const MAIN_LOG: &str = "quote_manager.log";
/// File name of the error log.
const ERROR_LOG: &str = "quote_manager_error.log";

// ─── Bootstrap ───────────────────────────────────────────────────────────────

/// Paths of the two log files under `<var>/log/`.
pub struct LogFiles {
  main:  PathBuf,
  error: PathBuf,
}

impl LogFiles {
  /// Create `<var>/log/` and both log files if they do not exist yet.
  pub fn bootstrap(var_dir: &Path) -> std::io::Result<Self> {
    let log_dir = var_dir.join("log");
    fs::create_dir_all(&log_dir)?;

    let main = log_dir.join(MAIN_LOG);
    let error = log_dir.join(ERROR_LOG);
    for path in [&main, &error] {
      if !path.exists() {
        File::create(path)?;
      }
    }

    Ok(Self { main, error })
  }

  /// Append-mode writer for the main log, handed to the tracing subscriber.
  pub fn main_writer(&self) -> std::io::Result<Arc<File>> {
    let file = OpenOptions::new().append(true).open(&self.main)?;
    Ok(Arc::new(file))
  }

  pub fn error_log_path(&self) -> &Path { &self.error }
}

// ─── Error log ───────────────────────────────────────────────────────────────

/// Append-only error reporting, passed explicitly into each command handler.
#[derive(Debug, Clone)]
pub struct ErrorLog {
  path: PathBuf,
}

impl ErrorLog {
  pub fn new(path: PathBuf) -> Self { Self { path } }

  /// Append one timestamped line.
  ///
  /// A failure to write the log is reported through tracing and otherwise
  /// ignored; logging must never fail the command itself.
  pub fn record(&self, message: &str) {
    let line = format!("{} ERROR {message}\n", Utc::now().to_rfc3339());
    let result = OpenOptions::new()
      .append(true)
      .create(true)
      .open(&self.path)
      .and_then(|mut f| f.write_all(line.as_bytes()));

    if let Err(e) = result {
      tracing::warn!(
        "failed to append to error log {}: {e}",
        self.path.display()
      );
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bootstrap_creates_log_dir_and_files() {
    let dir = tempfile::tempdir().unwrap();
    let logs = LogFiles::bootstrap(dir.path()).unwrap();

    assert!(dir.path().join("log").join(MAIN_LOG).exists());
    assert!(logs.error_log_path().exists());
  }

  #[test]
  fn bootstrap_is_idempotent_and_preserves_content() {
    let dir = tempfile::tempdir().unwrap();
    let logs = LogFiles::bootstrap(dir.path()).unwrap();

    let errlog = ErrorLog::new(logs.error_log_path().to_path_buf());
    errlog.record("first failure");

    let logs = LogFiles::bootstrap(dir.path()).unwrap();
    let content = fs::read_to_string(logs.error_log_path()).unwrap();
    assert!(content.contains("first failure"));
  }

  #[test]
  fn record_appends_timestamped_lines() {
    let dir = tempfile::tempdir().unwrap();
    let errlog = ErrorLog::new(dir.path().join("err.log"));

    errlog.record("one");
    errlog.record("two");

    let content = fs::read_to_string(dir.path().join("err.log")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("ERROR one"));
    assert!(lines[1].contains("ERROR two"));
  }
}
