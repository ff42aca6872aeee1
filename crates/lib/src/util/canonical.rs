//! Canonical form of decoded objects.
//!
//! Two decodings of the same object must serialize to the same bytes no matter
//! how their map keys or named list entries were ordered. [`canonicalize`]
//! turns a [`DecodedValue`] into a [`CanonicalValue`] where:
//! - mapping keys are ordered ascending (byte-wise) at every level
//! - lists that contain mappings are ordered by each mapping's `name` field
//! - everything else keeps its original order and value
//!
//! A list mixing mappings with other values, or holding a mapping without a
//! string `name`, has no defined order and is rejected.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Number, Value};

use crate::consts::NAME_FIELD;

/// A decoded, untyped object tree.
pub type DecodedValue = Value;

/// A canonicalized object tree.
///
/// Mappings live in a [`BTreeMap`], so serializing a `CanonicalValue` always
/// emits keys in ascending order regardless of how `serde_json` was built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CanonicalValue {
  Null,
  Bool(bool),
  Number(Number),
  String(String),
  Sequence(Vec<CanonicalValue>),
  Mapping(BTreeMap<String, CanonicalValue>),
}

/// A list element that prevents a deterministic ordering.
///
/// `path` is the JSON pointer of the offending element in the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonicalizeError {
  #[error("list element at {path} is a {found}, but its list holds mappings sorted by 'name'")]
  NotAMapping { path: String, found: &'static str },

  #[error("list element at {path} has no 'name' field to sort by")]
  MissingName { path: String },

  #[error("list element at {path} has a {found} 'name' field, expected a string")]
  NonStringName { path: String, found: &'static str },
}

/// Canonicalize a decoded value.
///
/// # Errors
///
/// Returns [`CanonicalizeError`] when a list contains at least one mapping and
/// any of its elements is not a mapping with a string `name`.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use specdrift_lib::util::canonical::canonicalize;
///
/// let a = canonicalize(json!({"b": 2, "a": 1})).unwrap();
/// let b = canonicalize(json!({"a": 1, "b": 2})).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn canonicalize(value: DecodedValue) -> Result<CanonicalValue, CanonicalizeError> {
  match value {
    Value::Null => Ok(CanonicalValue::Null),
    Value::Bool(b) => Ok(CanonicalValue::Bool(b)),
    Value::Number(n) => Ok(CanonicalValue::Number(n)),
    Value::String(s) => Ok(CanonicalValue::String(s)),
    Value::Array(items) => sort_by_name(items)?
      .into_iter()
      .enumerate()
      .map(|(index, item)| canonicalize(item).map_err(|e| e.within(&index.to_string())))
      .collect::<Result<_, _>>()
      .map(CanonicalValue::Sequence),
    Value::Object(map) => map
      .into_iter()
      .map(|(key, item)| match canonicalize(item) {
        Ok(item) => Ok((key, item)),
        Err(e) => Err(e.within(&key)),
      })
      .collect::<Result<_, _>>()
      .map(CanonicalValue::Mapping),
  }
}

impl CanonicalizeError {
  /// Prefix the error path with one JSON pointer segment (RFC 6901 escaping).
  fn within(mut self, segment: &str) -> Self {
    let path = match &mut self {
      Self::NotAMapping { path, .. } | Self::MissingName { path } | Self::NonStringName { path, .. } => path,
    };
    let segment = segment.replace('~', "~0").replace('/', "~1");
    *path = format!("/{}{}", segment, path);
    self
  }
}

/// Order a list of mappings by their `name` field.
///
/// Lists without any mapping are returned untouched. The sort is stable, so
/// entries sharing a name keep their relative order.
fn sort_by_name(items: Vec<Value>) -> Result<Vec<Value>, CanonicalizeError> {
  if !items.iter().any(Value::is_object) {
    return Ok(items);
  }

  let mut keyed = Vec::with_capacity(items.len());
  for (index, item) in items.into_iter().enumerate() {
    let name = sort_name(&item).map_err(|e| e.within(&index.to_string()))?;
    keyed.push((name, item));
  }
  keyed.sort_by(|a, b| a.0.cmp(&b.0));

  Ok(keyed.into_iter().map(|(_, item)| item).collect())
}

/// The element's `name`, or an error with an empty path for the caller to fill.
fn sort_name(item: &Value) -> Result<String, CanonicalizeError> {
  let map = item.as_object().ok_or_else(|| CanonicalizeError::NotAMapping {
    path: String::new(),
    found: kind(item),
  })?;
  match map.get(NAME_FIELD) {
    Some(Value::String(name)) => Ok(name.clone()),
    Some(other) => Err(CanonicalizeError::NonStringName {
      path: String::new(),
      found: kind(other),
    }),
    None => Err(CanonicalizeError::MissingName { path: String::new() }),
  }
}

fn kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "sequence",
    Value::Object(_) => "mapping",
  }
}
