//! Client validation rules
//!
//! # Validation Rules
//!
//! ## Structural (field order: name, cpf, city, uf)
//! - `name`, `cpf`, `city` and `uf` must be present and non-empty
//! - `cpf` must pass the checksum; an empty CPF fails both rules
//!
//! ## Uniqueness
//! - On create, no stored client may hold the same CPF
//! - On update, no *other* stored client may hold the same CPF
//!
//! All rules run and their violations are collected in one list.

use tracing::warn;
use validator::Validate;

use core_kernel::{ClientId, FieldErrors};

use crate::client::ClientForm;
use crate::cpf;
use crate::error::ClientError;
use crate::service::ClientService;

/// Rust field name to public field name, in reporting order
pub const CLIENT_FIELDS: &[(&str, &str)] = &[
    ("name", "name"),
    ("cpf", "cpf"),
    ("city", "city"),
    ("uf", "uf"),
];

pub const CPF_INVALID: &str = "cpf_invalid";
pub const CPF_ALREADY_EXISTS: &str = "cpf_already_exists";

/// Validator for client forms
pub struct ClientValidator;

impl ClientValidator {
    /// Runs every client rule against a normalized form
    ///
    /// `id` is the id of the client being updated, or `None` on create.
    /// Store failures abort validation.
    pub async fn validate(
        form: &ClientForm,
        id: Option<&ClientId>,
        service: &ClientService,
    ) -> Result<FieldErrors, ClientError> {
        let mut errors = Self::validate_structure(form);
        errors.extend(Self::validate_uniqueness(form, id, service).await?);

        if !errors.is_empty() {
            warn!(client_id = ?id, violations = errors.len(), "Client form rejected");
        }
        Ok(errors)
    }

    /// Presence and CPF checksum rules, no store access
    pub fn validate_structure(form: &ClientForm) -> FieldErrors {
        let derived = form.validate().err();
        let mut errors = FieldErrors::new();

        for &(name, public) in CLIENT_FIELDS {
            if let Some(derived) = &derived {
                errors.extend_from_validation(derived, name, public);
            }
            if name == "cpf" {
                if let Some(value) = form.cpf.as_deref() {
                    if !cpf::is_valid(value) {
                        errors.reject(public, CPF_INVALID, "CPF inválido");
                    }
                }
            }
        }
        errors
    }

    /// CPF uniqueness against the store
    pub async fn validate_uniqueness(
        form: &ClientForm,
        id: Option<&ClientId>,
        service: &ClientService,
    ) -> Result<FieldErrors, ClientError> {
        let mut errors = FieldErrors::new();
        let Some(value) = form.cpf.as_deref().filter(|v| !v.is_empty()) else {
            return Ok(errors);
        };

        let Some(holder) = service.find_by_cpf(value).await? else {
            return Ok(errors);
        };

        match id {
            None => errors.reject("cpf", CPF_ALREADY_EXISTS, "Cpf já existe"),
            Some(id) if holder.id.as_ref() != Some(id) => {
                errors.reject("cpf", CPF_ALREADY_EXISTS, "Cpf já é usado por outro usuário")
            }
            Some(_) => {}
        }
        Ok(errors)
    }
}
