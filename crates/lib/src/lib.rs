//! specdrift-lib: Spec-change detection for declarative reconciliation
//!
//! This crate provides the pieces a reconciliation loop needs to decide whether
//! a desired object must be re-applied:
//! - `util::canonical`: order-independent canonical form of decoded objects
//! - `util::hash`: SHA-256 fingerprints over the canonical form
//! - `detect`: last-applied-hash annotation protocol between current and desired
//! - `object`: the annotation-carrying object model and file loading

pub mod consts;
pub mod detect;
pub mod object;
pub mod util;
