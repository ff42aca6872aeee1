//! Hashing utilities for change detection and naming.
//!
//! This module provides:
//! - `Fingerprint`: a full 64-character SHA-256 of an object's canonical form
//! - `fingerprint()`: fingerprint any serializable object
//! - `hash_bytes()`: arbitrary byte hashing
//! - `name_hash()`: short, name-safe, non-cryptographic string hash

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::consts::NAME_SAFE_ALPHABET;
use crate::util::canonical::{CanonicalizeError, DecodedValue, canonicalize};

/// SHA-256 of an object's canonical JSON encoding.
///
/// Two objects with the same fingerprint are treated as semantically equal.
///
/// # Format
///
/// The hash is a lowercase hexadecimal string (64 characters).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(pub String);

impl Fingerprint {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Display for Fingerprint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// An object that cannot be fingerprinted.
///
/// Every variant points at the caller's data rather than at a runtime
/// condition: there is no fingerprint to fall back to.
#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
  #[error("failed to encode object: {0}")]
  Encode(#[source] serde_json::Error),

  #[error("failed to canonicalize object: {0}")]
  Canonicalize(#[from] CanonicalizeError),

  #[error("failed to serialize canonical object: {0}")]
  Serialize(#[source] serde_json::Error),
}

/// Types whose content can be fingerprinted.
pub trait Fingerprintable: Serialize {
  fn fingerprint(&self) -> Result<Fingerprint, FingerprintError> {
    fingerprint(self)
  }
}

/// Fingerprint a serializable object.
///
/// The object is encoded with its own serde rules (renames, skipped empty
/// fields), canonicalized, re-encoded as compact JSON and hashed.
pub fn fingerprint<T: Serialize + ?Sized>(object: &T) -> Result<Fingerprint, FingerprintError> {
  let value = serde_json::to_value(object).map_err(FingerprintError::Encode)?;
  fingerprint_value(value)
}

/// Fingerprint an already decoded value.
pub fn fingerprint_value(value: DecodedValue) -> Result<Fingerprint, FingerprintError> {
  let bytes = canonical_bytes(value)?;
  Ok(Fingerprint(hash_bytes(&bytes)))
}

/// Compact JSON encoding of a value's canonical form.
pub fn canonical_bytes(value: DecodedValue) -> Result<Vec<u8>, FingerprintError> {
  let canonical = canonicalize(value)?;
  serde_json::to_vec(&canonical).map_err(FingerprintError::Serialize)
}

/// Hash arbitrary bytes.
///
/// Returns the full 64-character SHA-256 hash as lowercase hex.
pub fn hash_bytes(data: &[u8]) -> String {
  let mut hasher = Sha256::new();
  hasher.update(data);
  hex::encode(hasher.finalize())
}

const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;

/// Short hash for use inside resource names.
///
/// Computes FNV-1a (32-bit) over the UTF-8 bytes of `s`, renders it in
/// decimal and maps every digit through [`NAME_SAFE_ALPHABET`]. The result is
/// at most 10 characters and never contains vowels, so it is safe to embed in
/// DNS-style names. Not suitable for change detection; use [`fingerprint`].
pub fn name_hash(s: &str) -> String {
  let hash = s.bytes().fold(FNV32_OFFSET_BASIS, |hash, byte| {
    (hash ^ u32::from(byte)).wrapping_mul(FNV32_PRIME)
  });

  hash
    .to_string()
    .chars()
    .map(|c| NAME_SAFE_ALPHABET[c as usize % NAME_SAFE_ALPHABET.len()] as char)
    .collect()
}
