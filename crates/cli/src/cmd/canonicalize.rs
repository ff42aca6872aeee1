use std::path::Path;

use anyhow::{Context, Result};

use specdrift_lib::object::{Resource, load_object};
use specdrift_lib::util::canonical::canonicalize;

use crate::output::print_json;

pub fn cmd_canonicalize(file: &Path) -> Result<()> {
  let object: Resource = load_object(file)?;
  let value = serde_json::to_value(&object).context("Failed to encode object")?;
  let canonical = canonicalize(value).with_context(|| format!("Failed to canonicalize {}", file.display()))?;

  print_json(&canonical)
}
