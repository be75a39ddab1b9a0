//! Client Registry Domain
//!
//! This crate owns everything about insurance clients (policyholders):
//!
//! - The `Client` record and the `ClientForm` it is built from
//! - CPF normalization and checksum rules
//! - Structural and uniqueness validation of client forms
//! - The `ClientPort` store interface and an in-memory adapter (`mock` feature)
//! - `ClientService`, the entry point used by the HTTP layer
//!
//! # Examples
//!
//! ```rust
//! use domain_client::{cpf, ClientForm};
//!
//! let form = ClientForm {
//!     name: Some("Maria Souza".to_string()),
//!     cpf: Some("728.687.544-22".to_string()),
//!     city: Some("Porto Alegre".to_string()),
//!     uf: Some("RS".to_string()),
//! }
//! .normalized();
//!
//! assert_eq!(form.cpf.as_deref(), Some("72868754422"));
//! assert!(cpf::is_valid("72868754422"));
//! ```

pub mod client;
pub mod cpf;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;

pub use client::{Client, ClientForm};
pub use error::ClientError;
pub use ports::ClientPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockClientPort;
pub use service::ClientService;
pub use validation::{ClientValidator, CLIENT_FIELDS};
