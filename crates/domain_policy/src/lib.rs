//! Vehicle Policy Domain
//!
//! This crate implements vehicle insurance policies held by registry clients.
//!
//! - **Policy**: a numbered term (`effective_date_start_at` to
//!   `effective_date_end_at`) covering one vehicle plate for one client
//! - **Expiry**: derived against "now", never stored
//! - **Numbering**: random policy numbers in `[0, 100000)`, redrawn until free
//! - **Validation**: required fields plus the client reference check
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{PolicyService, FakeNumberSource};
//!
//! let service = PolicyService::new(policy_port, Arc::new(FakeNumberSource));
//! let number = service.generate_number().await?;
//! let form = form.with_number(number);
//! let errors = PolicyValidator::validate(&form, &client_service).await?;
//! if errors.is_empty() {
//!     service.create(form.into_policy(None)?).await?;
//! }
//! ```

pub mod policy;
pub mod numbering;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

pub use policy::{ClientRef, ExpiryStatus, Policy, PolicyForm};
pub use numbering::{FakeNumberSource, NumberSource, MAX_POLICY_NUMBER};
#[cfg(any(test, feature = "mock"))]
pub use numbering::SequenceNumberSource;
pub use error::PolicyError;
pub use ports::PolicyPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockPolicyPort;
pub use services::PolicyService;
pub use validation::{PolicyValidator, POLICY_FIELDS};
