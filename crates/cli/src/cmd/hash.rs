//! Hash command implementation.
//!
//! Prints the fingerprint the change detector would compute for an object.

use std::path::Path;

use anyhow::{Context, Result};

use specdrift_lib::object::{Resource, load_object};
use specdrift_lib::util::hash::Fingerprintable;

use crate::output::print_json;

pub fn cmd_hash(file: &Path, json: bool) -> Result<()> {
  let object: Resource = load_object(file)?;
  let fingerprint = object
    .fingerprint()
    .with_context(|| format!("Failed to fingerprint {}", file.display()))?;

  if json {
    print_json(&serde_json::json!({ "file": file, "fingerprint": fingerprint }))?;
  } else {
    println!("{}", fingerprint);
  }

  Ok(())
}
