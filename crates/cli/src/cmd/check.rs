//! Check command implementation.
//!
//! Runs one reconciliation decision: compares the desired object file with
//! the current one and, when the spec changed, optionally writes the desired
//! object stamped with its new fingerprint.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use specdrift_lib::detect::{ChangeDetector, SpecChange};
use specdrift_lib::object::{Resource, load_object, save_object};

use crate::output::{print_changed, print_json, print_stat, print_success, symbols, truncate_hash};

pub struct CheckOptions {
  pub desired: PathBuf,
  pub current: Option<PathBuf>,
  pub write: Option<PathBuf>,
  pub annotation_key: String,
}

/// Returns whether the desired object must be applied.
pub fn cmd_check(options: &CheckOptions, json: bool) -> Result<bool> {
  let mut desired: Resource = load_object(&options.desired)?;
  let current: Option<Resource> = options.current.as_deref().map(load_object::<Resource>).transpose()?;

  let detector = ChangeDetector::new(options.annotation_key.as_str());
  debug!(key = %detector.annotation_key(), desired = ?options.desired, "checking for spec change");

  let change = detector
    .detect(current.as_ref(), &mut desired)
    .with_context(|| format!("Failed to fingerprint {}", options.desired.display()))?;
  let changed = change.is_changed();

  let written = match &options.write {
    Some(path) if changed => {
      save_object(&desired, path)?;
      Some(path)
    }
    _ => None,
  };

  if json {
    print_json(&serde_json::json!({
      "changed": changed,
      "change": change,
      "written": written,
    }))?;
  } else {
    print_human(&change);
    if let Some(path) = written {
      print_stat("Written", &path.display().to_string());
    }
  }

  Ok(changed)
}

fn print_human(change: &SpecChange) {
  match change {
    SpecChange::Created { fingerprint } => {
      print_changed(&format!("changed: no current object ({})", truncate_hash(fingerprint.as_str())));
    }
    SpecChange::MissingAnnotation { fingerprint } => {
      print_changed(&format!(
        "changed: current object has no recorded fingerprint ({})",
        truncate_hash(fingerprint.as_str())
      ));
    }
    SpecChange::Modified { previous, fingerprint } => {
      print_changed(&format!(
        "changed: {} {} {}",
        truncate_hash(previous),
        symbols::ARROW,
        truncate_hash(fingerprint.as_str())
      ));
    }
    SpecChange::Unchanged { fingerprint } => {
      print_success(&format!("unchanged ({})", truncate_hash(fingerprint.as_str())));
    }
  }
}
