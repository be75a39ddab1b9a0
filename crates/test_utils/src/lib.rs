//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! registry test suite.
//!
//! # Modules
//!
//! - `fixtures`: Known-good CPFs, dates and forms
//! - `builders`: Builders for client and policy forms, records and payloads
//! - `database`: PostgreSQL testcontainer management
//! - `assertions`: Assertions over field error lists
//! - `generators`: proptest strategies and `fake` data
//! - `logging`: One-time tracing setup for tests

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
pub use logging::init_test_tracing;
