//! Object model for change detection.
//!
//! Anything the detector compares implements [`ManagedObject`]: it serializes
//! to its content and exposes a string annotation map. [`Resource`] is a
//! generic implementation for Kubernetes-shaped documents read from disk.

mod load;
mod types;

pub use load::*;
pub use types::*;
