//! Find command implementation.
//!
//! Lists object files under a directory, e.g. every `.yaml` manifest.

use std::path::Path;

use anyhow::Result;

use specdrift_lib::util::fs::files_with_suffix;

use crate::output::print_json;

pub fn cmd_find(dir: &Path, suffixes: &[String], json: bool) -> Result<()> {
  let suffixes: Vec<&str> = suffixes.iter().map(String::as_str).collect();
  let files = files_with_suffix(dir, &suffixes)?;

  if json {
    print_json(&files)?;
  } else {
    for file in &files {
      println!("{}", file.display());
    }
  }

  Ok(())
}
