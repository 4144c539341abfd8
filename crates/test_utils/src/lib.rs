//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! rental ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built lease terms, records and month labels
//! - `builders`: Builder patterns for rentals and edited ledgers
//! - `assertions`: Ledger consistency checks
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
