//! Object types.
//!
//! # Encoding
//!
//! Fingerprints are computed over the serde encoding of these types, so the
//! omission rules below are part of the hash format:
//! - empty `apiVersion`, `kind`, `metadata.name` and `metadata.namespace`
//!   are left out
//! - absent or empty `labels` / `annotations` are left out
//! - unknown fields are kept verbatim in `content` / `extra`
//!
//! Changing any of these rules changes every fingerprint and causes one
//! spurious update per object on the next reconciliation pass.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::util::hash::Fingerprintable;

/// String annotations attached to an object's metadata.
pub type Annotations = BTreeMap<String, String>;

/// An object carrying mutable string annotations alongside its content.
///
/// Both accessors are plain pass-throughs; the detector performs no
/// validation of annotation keys or values.
pub trait ManagedObject: Serialize {
  /// The object's annotations, or `None` when it has none.
  fn annotations(&self) -> Option<&Annotations>;

  /// Replace the object's annotations.
  fn set_annotations(&mut self, annotations: Annotations);
}

/// Object metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub name: String,

  #[serde(default, skip_serializing_if = "is_none_or_blank")]
  pub namespace: Option<String>,

  #[serde(default, skip_serializing_if = "is_none_or_empty")]
  pub labels: Option<BTreeMap<String, String>>,

  #[serde(default, skip_serializing_if = "is_none_or_empty")]
  pub annotations: Option<Annotations>,

  /// Remaining metadata fields (uid, ownerReferences, ...).
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// A generic Kubernetes-shaped resource.
///
/// Only the fields the detector needs are typed; `spec`, `data` and every
/// other top-level field is carried in `content`.
///
/// # Example
///
/// ```json
/// {
///   "apiVersion": "apps/v1",
///   "kind": "Deployment",
///   "metadata": { "name": "nim", "annotations": { "nvidia.com/last-applied-hash": "..." } },
///   "spec": { "replicas": 1 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub api_version: String,

  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub kind: String,

  #[serde(default)]
  pub metadata: ObjectMeta,

  #[serde(flatten)]
  pub content: Map<String, Value>,
}

impl Resource {
  pub fn new(api_version: impl Into<String>, kind: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      api_version: api_version.into(),
      kind: kind.into(),
      metadata: ObjectMeta {
        name: name.into(),
        ..ObjectMeta::default()
      },
      content: Map::new(),
    }
  }

  /// Set a top-level content field such as `spec`.
  pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
    self.content.insert(key.into(), value);
    self
  }

  /// Annotation value for `key`, if set.
  pub fn annotation(&self, key: &str) -> Option<&str> {
    self.metadata.annotations.as_ref()?.get(key).map(String::as_str)
  }
}

impl ManagedObject for Resource {
  fn annotations(&self) -> Option<&Annotations> {
    self.metadata.annotations.as_ref()
  }

  fn set_annotations(&mut self, annotations: Annotations) {
    self.metadata.annotations = Some(annotations);
  }
}

impl Fingerprintable for Resource {}

/// A container environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvVar {
  pub name: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,

  /// Source reference (secret, config map, field) kept as raw JSON.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value_from: Option<Value>,
}

impl EnvVar {
  pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      value: Some(value.into()),
      value_from: None,
    }
  }
}

fn is_none_or_blank(value: &Option<String>) -> bool {
  value.as_deref().is_none_or(str::is_empty)
}

fn is_none_or_empty<K, V>(map: &Option<BTreeMap<K, V>>) -> bool {
  map.as_ref().is_none_or(BTreeMap::is_empty)
}
