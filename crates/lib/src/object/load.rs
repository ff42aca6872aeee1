//! Reading and writing objects on disk.
//!
//! Format is chosen by extension: `.yaml` / `.yml` are YAML, everything else
//! is JSON. Writes go to a temporary sibling first and are renamed into place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// On-disk encoding of an object file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectFormat {
  Json,
  Yaml,
}

impl ObjectFormat {
  pub fn from_path(path: &Path) -> Self {
    match path.extension().and_then(|ext| ext.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => ObjectFormat::Yaml,
      _ => ObjectFormat::Json,
    }
  }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
  #[error("failed to read {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to parse {path}: {message}")]
  Parse { path: PathBuf, message: String },

  #[error("failed to serialize object for {path}: {message}")]
  Serialize { path: PathBuf, message: String },

  #[error("failed to write {path}: {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// Load an object from a JSON or YAML file.
pub fn load_object<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
  let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  let parsed = match ObjectFormat::from_path(path) {
    ObjectFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
    ObjectFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
  };

  parsed.map_err(|message| LoadError::Parse {
    path: path.to_path_buf(),
    message,
  })
}

/// Write an object to a JSON or YAML file.
///
/// Uses atomic write (write to temp, then rename) so a reader never sees a
/// partially written object.
pub fn save_object<T: Serialize>(object: &T, path: &Path) -> Result<(), LoadError> {
  let content = match ObjectFormat::from_path(path) {
    ObjectFormat::Json => serde_json::to_string_pretty(object)
      .map(|mut json| {
        json.push('\n');
        json
      })
      .map_err(|e| e.to_string()),
    ObjectFormat::Yaml => serde_yaml::to_string(object).map_err(|e| e.to_string()),
  }
  .map_err(|message| LoadError::Serialize {
    path: path.to_path_buf(),
    message,
  })?;

  let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
  temp_name.push(".tmp");
  let temp_path = path.with_file_name(temp_name);

  let write_err = |source| LoadError::Write {
    path: path.to_path_buf(),
    source,
  };
  fs::write(&temp_path, content).map_err(write_err)?;
  fs::rename(&temp_path, path).map_err(write_err)?;

  Ok(())
}
