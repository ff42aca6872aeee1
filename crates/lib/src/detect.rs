//! Spec-change detection.
//!
//! Decides whether a desired object has to be re-applied by comparing its
//! fingerprint with the one recorded on the current object under the
//! last-applied-hash annotation.
//!
//! # Protocol
//!
//! - No current object → changed.
//! - Current object without the annotation → changed.
//! - Annotation present but different from the desired fingerprint → changed.
//! - Annotation equal to the desired fingerprint → unchanged.
//!
//! Whenever the result is "changed", the desired object is stamped with its
//! fingerprint so that persisting it records what was applied. The
//! fingerprint is taken before stamping.

use serde::Serialize;
use tracing::{debug, info};

use crate::consts::LAST_APPLIED_HASH_ANNOTATION;
use crate::object::ManagedObject;
use crate::util::hash::{Fingerprint, FingerprintError, fingerprint};

/// Outcome of comparing a desired object against the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SpecChange {
  /// There is no current object.
  Created { fingerprint: Fingerprint },

  /// The current object carries no recorded fingerprint.
  MissingAnnotation { fingerprint: Fingerprint },

  /// The recorded fingerprint differs from the desired one.
  Modified { previous: String, fingerprint: Fingerprint },

  /// The recorded fingerprint matches the desired one.
  Unchanged { fingerprint: Fingerprint },
}

impl SpecChange {
  /// Returns true unless the recorded fingerprint matched.
  pub fn is_changed(&self) -> bool {
    !matches!(self, SpecChange::Unchanged { .. })
  }

  /// Fingerprint of the desired object.
  pub fn fingerprint(&self) -> &Fingerprint {
    match self {
      SpecChange::Created { fingerprint }
      | SpecChange::MissingAnnotation { fingerprint }
      | SpecChange::Modified { fingerprint, .. }
      | SpecChange::Unchanged { fingerprint } => fingerprint,
    }
  }
}

/// Change detector bound to an annotation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeDetector {
  annotation_key: String,
}

impl Default for ChangeDetector {
  fn default() -> Self {
    Self::new(LAST_APPLIED_HASH_ANNOTATION)
  }
}

impl ChangeDetector {
  pub fn new(annotation_key: impl Into<String>) -> Self {
    Self {
      annotation_key: annotation_key.into(),
    }
  }

  pub fn annotation_key(&self) -> &str {
    &self.annotation_key
  }

  /// Compare `desired` against `current`, stamping `desired` on change.
  ///
  /// # Errors
  ///
  /// Returns [`FingerprintError`] when `desired` cannot be fingerprinted. In
  /// that case `desired` is left untouched.
  pub fn detect<T: ManagedObject>(&self, current: Option<&T>, desired: &mut T) -> Result<SpecChange, FingerprintError> {
    let fingerprint = fingerprint(&*desired)?;

    let Some(current) = current else {
      debug!(fingerprint = %fingerprint, "no current object");
      self.stamp(desired, &fingerprint);
      return Ok(SpecChange::Created { fingerprint });
    };

    let recorded = current
      .annotations()
      .and_then(|annotations| annotations.get(&self.annotation_key));

    let change = match recorded {
      Some(previous) if *previous == fingerprint.0 => {
        debug!(fingerprint = %fingerprint, "spec unchanged");
        return Ok(SpecChange::Unchanged { fingerprint });
      }
      Some(previous) => {
        info!(previous = %previous, fingerprint = %fingerprint, "spec changed");
        SpecChange::Modified {
          previous: previous.clone(),
          fingerprint,
        }
      }
      None => {
        info!(key = %self.annotation_key, fingerprint = %fingerprint, "current object has no recorded fingerprint");
        SpecChange::MissingAnnotation { fingerprint }
      }
    };

    self.stamp(desired, change.fingerprint());
    Ok(change)
  }

  /// Like [`ChangeDetector::detect`], reduced to "must the object be applied".
  pub fn has_changed<T: ManagedObject>(&self, current: Option<&T>, desired: &mut T) -> Result<bool, FingerprintError> {
    self.detect(current, desired).map(|change| change.is_changed())
  }

  fn stamp<T: ManagedObject>(&self, desired: &mut T, fingerprint: &Fingerprint) {
    let mut annotations = desired.annotations().cloned().unwrap_or_default();
    annotations.insert(self.annotation_key.clone(), fingerprint.0.clone());
    desired.set_annotations(annotations);
  }
}

/// [`ChangeDetector::detect`] with the default annotation key.
pub fn detect_change<T: ManagedObject>(current: Option<&T>, desired: &mut T) -> Result<SpecChange, FingerprintError> {
  ChangeDetector::default().detect(current, desired)
}

/// [`ChangeDetector::has_changed`] with the default annotation key.
pub fn has_changed<T: ManagedObject>(current: Option<&T>, desired: &mut T) -> Result<bool, FingerprintError> {
  ChangeDetector::default().has_changed(current, desired)
}
