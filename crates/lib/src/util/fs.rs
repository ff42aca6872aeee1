//! Filesystem helpers.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Error while walking a directory tree.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
  #[error("error traversing directory tree {path}: {source}")]
  Walk {
    path: String,
    #[source]
    source: walkdir::Error,
  },
}

/// Collect every file under `base_dir` whose name ends with one of `suffixes`.
///
/// The walk is recursive and sorted by file name, so the result is stable
/// across runs. Directories are never returned, even when their name matches.
/// A file matching several suffixes is listed once.
///
/// # Example
///
/// ```ignore
/// let manifests = files_with_suffix(Path::new("manifests"), &[".yaml", ".yml"])?;
/// ```
pub fn files_with_suffix(base_dir: &Path, suffixes: &[&str]) -> Result<Vec<PathBuf>, WalkError> {
  let mut files = Vec::new();

  for entry in WalkDir::new(base_dir).sort_by_file_name() {
    let entry = entry.map_err(|source| WalkError::Walk {
      path: base_dir.display().to_string(),
      source,
    })?;

    if entry.file_type().is_dir() {
      continue;
    }

    let matched = {
      let name = entry.file_name().to_string_lossy();
      suffixes.iter().any(|suffix| name.ends_with(suffix))
    };
    if matched {
      files.push(entry.into_path());
    }
  }

  Ok(files)
}
