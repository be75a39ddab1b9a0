//! Repository implementations
//!
//! Repositories own the SQL for one table and map rows to plain structs.
//! Queries are checked at runtime (`query_as::<_, Row>`), so building the
//! crate does not need a live database.

pub mod client;
pub mod policy;

pub use client::{ClientRepository, ClientRow, ClientRecord};
pub use policy::{PolicyRepository, PolicyRow, PolicyRecord};
