//! Client domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the client domain
#[derive(Debug, Error)]
pub enum ClientError {
    /// A form reached the domain without a required field
    #[error("Incomplete client form: missing {0}")]
    IncompleteForm(&'static str),

    /// The client store failed
    #[error("Client store error: {0}")]
    Store(#[from] PortError),
}

impl ClientError {
    /// Returns true if the store rejected the write on a unique key
    pub fn is_conflict(&self) -> bool {
        matches!(self, ClientError::Store(e) if e.is_conflict())
    }
}
