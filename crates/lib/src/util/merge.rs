//! Merging of labels, annotations and container environments.

use std::collections::{BTreeMap, HashMap};

use crate::object::EnvVar;

/// Merge two maps, keeping `primary`'s value when both contain a key.
pub fn merge_maps<K, V>(primary: &BTreeMap<K, V>, secondary: &BTreeMap<K, V>) -> BTreeMap<K, V>
where
  K: Ord + Clone,
  V: Clone,
{
  let mut merged = primary.clone();
  for (key, value) in secondary {
    merged.entry(key.clone()).or_insert_with(|| value.clone());
  }
  merged
}

/// Merge two environment lists by variable name, `overrides` winning.
///
/// Each name appears once, in the slot where it first appeared across
/// `base` then `overrides`.
pub fn merge_env_vars(base: &[EnvVar], overrides: &[EnvVar]) -> Vec<EnvVar> {
  let mut merged: Vec<EnvVar> = Vec::with_capacity(base.len() + overrides.len());
  let mut slots: HashMap<&str, usize> = HashMap::new();

  for env in base.iter().chain(overrides) {
    match slots.get(env.name.as_str()) {
      Some(&slot) => merged[slot] = env.clone(),
      None => {
        slots.insert(env.name.as_str(), merged.len());
        merged.push(env.clone());
      }
    }
  }

  merged
}
