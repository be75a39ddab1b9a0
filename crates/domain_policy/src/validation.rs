//! Policy validation rules
//!
//! Structural rules report in field order (number, effectiveDateStartAt,
//! effectiveDateEndAt, vehiclePlate, client). The client reference check
//! follows:
//!
//! - a client object without an id is reported on `client.id`
//! - an id that matches no stored client is reported on `client`
//!
//! A missing client object is left to the structural rule.

use tracing::warn;

use core_kernel::FieldErrors;
use domain_client::ClientService;

use crate::error::PolicyError;
use crate::policy::PolicyForm;

/// Rust field name to public field name, in reporting order
pub const POLICY_FIELDS: &[(&str, &str)] = &[
    ("number", "number"),
    ("effective_date_start_at", "effectiveDateStartAt"),
    ("effective_date_end_at", "effectiveDateEndAt"),
    ("vehicle_plate", "vehiclePlate"),
    ("client", "client"),
];

pub const CLIENT_ID_IS_REQUIRED: &str = "client_id_is_required";
pub const CLIENT_NOT_FOUND: &str = "client_not_found";

/// Validator for policy forms
pub struct PolicyValidator;

impl PolicyValidator {
    /// Runs every policy rule; store failures abort validation
    pub async fn validate(
        form: &PolicyForm,
        clients: &ClientService,
    ) -> Result<FieldErrors, PolicyError> {
        let mut errors = Self::validate_structure(form);
        errors.extend(Self::validate_client_reference(form, clients).await?);

        if !errors.is_empty() {
            warn!(number = ?form.number, violations = errors.len(), "Policy form rejected");
        }
        Ok(errors)
    }

    pub fn validate_structure(form: &PolicyForm) -> FieldErrors {
        FieldErrors::validate_fields(form, POLICY_FIELDS)
    }

    /// Checks that the referenced client exists
    pub async fn validate_client_reference(
        form: &PolicyForm,
        clients: &ClientService,
    ) -> Result<FieldErrors, PolicyError> {
        let mut errors = FieldErrors::new();
        let Some(client) = form.client.as_ref() else {
            return Ok(errors);
        };

        match client.id.as_ref() {
            None => errors.reject("client.id", CLIENT_ID_IS_REQUIRED, "Id do Cliente é obrigatório"),
            Some(id) => {
                if clients.find_by_id(id).await?.is_none() {
                    errors.reject("client", CLIENT_NOT_FOUND, "Cliente não encontrado");
                }
            }
        }
        Ok(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use chrono::NaiveDate;
    use core_kernel::ClientId;
    use domain_client::{Client, ClientPort, MockClientPort};
    use crate::policy::ClientRef;

    async fn clients_with_one() -> (ClientService, ClientId) {
        let port = MockClientPort::new();
        let saved = port
            .save(Client::new("Ana", "72868754422", "Porto Alegre", "RS"))
            .await
            .unwrap();
        (ClientService::new(Arc::new(port)), saved.id.unwrap())
    }

    fn complete_form(client_id: ClientId) -> PolicyForm {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        PolicyForm {
            number: Some(1),
            effective_date_start_at: Some(start),
            effective_date_end_at: Some(start + chrono::Duration::days(365)),
            vehicle_plate: Some("ABC1D23".to_string()),
            client: Some(ClientRef::new(client_id)),
        }
    }

    #[tokio::test]
    async fn test_complete_form_passes() {
        let (clients, id) = clients_with_one().await;
        let errors = PolicyValidator::validate(&complete_form(id), &clients).await.unwrap();
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_empty_form_reports_structure_in_order() {
        let (clients, _) = clients_with_one().await;
        let errors = PolicyValidator::validate(&PolicyForm::default(), &clients).await.unwrap();
        assert_eq!(
            errors.messages(),
            vec![
                "Número da apólice é obrigatório",
                "Data inicial de vigência é obrigatória",
                "Data final de vigência é obrigatória",
                "Placa do veículo é obrigatória",
                "Cliente é obrigatório",
            ]
        );
    }

    #[tokio::test]
    async fn test_client_without_id() {
        let (clients, id) = clients_with_one().await;
        let mut form = complete_form(id);
        form.client = Some(ClientRef::default());

        let errors = PolicyValidator::validate(&form, &clients).await.unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("client.id"));
        assert!(errors.has_code(CLIENT_ID_IS_REQUIRED));
    }

    #[tokio::test]
    async fn test_unknown_client() {
        let (clients, _) = clients_with_one().await;
        let form = complete_form(ClientId::new("nobody"));

        let errors = PolicyValidator::validate(&form, &clients).await.unwrap();
        assert_eq!(errors.messages(), vec!["Cliente não encontrado"]);
        assert!(errors.has_code(CLIENT_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_empty_plate_is_not_empty_violation() {
        let (clients, id) = clients_with_one().await;
        let mut form = complete_form(id);
        form.vehicle_plate = Some(String::new());

        let errors = PolicyValidator::validate(&form, &clients).await.unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("vehiclePlate"));
        assert!(errors.has_code("not_empty"));
    }
}
