//! Core Kernel - Foundational types shared by the registry crates
//!
//! This crate provides the building blocks used across the domain modules:
//! - Strongly-typed entity identifiers
//! - Port error and health types for store adapters
//! - Offset pagination primitives
//! - Local date-time handling for policy terms
//! - Field-level validation errors

pub mod identifiers;
pub mod ports;
pub mod pagination;
pub mod temporal;
pub mod validation;

pub use identifiers::{ClientId, PolicyId};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
pub use pagination::{Page, PageRequest};
pub use temporal::{Timezone, TemporalError};
pub use validation::{FieldError, FieldErrors};
