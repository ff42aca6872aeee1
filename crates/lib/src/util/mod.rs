//! Shared utilities.
//!
//! Canonicalization and hashing used by change detection, plus the small merge
//! and filesystem helpers used when building desired objects.

pub mod canonical;
pub mod fs;
pub mod hash;
pub mod merge;
