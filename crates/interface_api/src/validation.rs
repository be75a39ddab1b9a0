//! Form validation dispatch
//!
//! Handlers wrap the submitted form in an `EntityForm` and get back the full
//! ordered list of violations for that entity kind.

use core_kernel::{ClientId, FieldErrors};
use domain_client::{ClientForm, ClientValidator};
use domain_policy::{PolicyForm, PolicyValidator};

use crate::error::ApiError;
use crate::AppState;

/// A submitted form of either entity kind
#[derive(Debug, Clone, Copy)]
pub enum EntityForm<'a> {
    /// A client form; `id` is set on update
    Client {
        form: &'a ClientForm,
        id: Option<&'a ClientId>,
    },
    /// A policy form, number already assigned
    Policy(&'a PolicyForm),
}

impl EntityForm<'_> {
    /// Runs the structural and cross-entity rules of the form's kind
    pub async fn validate(&self, state: &AppState) -> Result<FieldErrors, ApiError> {
        match *self {
            EntityForm::Client { form, id } => {
                Ok(ClientValidator::validate(form, id, &state.clients).await?)
            }
            EntityForm::Policy(form) => Ok(PolicyValidator::validate(form, &state.clients).await?),
        }
    }

    /// Fails with `ApiError::Validation` if any rule is violated
    pub async fn ensure_valid(&self, state: &AppState) -> Result<(), ApiError> {
        let errors = self.validate(state).await?;
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(errors))
        }
    }
}
