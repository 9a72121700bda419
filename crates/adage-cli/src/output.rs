//! Rendering command outcomes as single-line JSON objects on stdout.
//!
//! stdout carries only results; all diagnostics go to the log files.

use serde_json::json;

use crate::commands::Outcome;

pub fn print_outcome(outcome: &Outcome) {
  match outcome {
    Outcome::Imported { count, file } => {
      println!(
        "{}",
        json!({ "status": "success", "imported": count, "file": file })
      );
    }
    Outcome::Added { quote } | Outcome::Generated { quote } => {
      println!(
        "{}",
        json!({
          "status": "success",
          "quote": quote.quote,
          "category": quote.category,
          "author": quote.author,
        })
      );
    }
    Outcome::Listed { quotes } => {
      for quote in quotes {
        println!(
          "{}",
          json!({
            "quote": quote.quote,
            "author": quote.author,
            "category": quote.category,
          })
        );
      }
    }
    Outcome::Values { values } => {
      for value in values {
        println!("{value}");
      }
    }
    Outcome::NotFound { message } => {
      println!("{}", json!({ "status": "not_found", "message": message }));
    }
    Outcome::Error { message } => {
      println!("{}", json!({ "status": "error", "message": message }));
    }
  }
}
