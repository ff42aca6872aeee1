//! CLI integration tests driving full reconciliation passes through files.

mod check_tests;
mod common;
