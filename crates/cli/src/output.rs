//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output: colored status lines
//! on the human-readable path, pretty JSON on the `--json` path.

use anyhow::Context;
use owo_colors::{OwoColorize, Stream};

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const CHANGED: &str = "~";
  pub const ARROW: &str = "→";
}

/// First 12 characters of a hash. Annotation values are user data, so this
/// cuts on a char boundary.
pub fn truncate_hash(hash: &str) -> &str {
  hash.char_indices().nth(12).map_or(hash, |(i, _)| &hash[..i])
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_changed(message: &str) {
  println!(
    "{} {}",
    symbols::CHANGED.if_supports_color(Stream::Stdout, |s| s.yellow()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
