//! Policy domain errors

use thiserror::Error;

use core_kernel::PortError;
use domain_client::ClientError;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A form reached the domain without a required field
    #[error("Incomplete policy form: missing {0}")]
    IncompleteForm(&'static str),

    /// The policy store failed
    #[error("Policy store error: {0}")]
    Store(#[from] PortError),

    /// The client lookup behind a policy failed
    #[error("Client lookup failed: {0}")]
    Client(#[from] ClientError),
}

impl PolicyError {
    /// Returns true if the store rejected the write on a unique key
    pub fn is_conflict(&self) -> bool {
        match self {
            PolicyError::Store(e) => e.is_conflict(),
            PolicyError::Client(e) => e.is_conflict(),
            PolicyError::IncompleteForm(_) => false,
        }
    }
}
