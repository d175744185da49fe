//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! record service test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built request payloads for claims, rules, and items
//! - `builders`: Builders for records in states the API cannot produce
//! - `storage`: Temporary item files for file-backed store tests
//! - `assertions`: Assertion helpers for port results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod storage;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use storage::*;
pub use assertions::*;
pub use generators::*;
