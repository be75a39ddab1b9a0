//! Client records and the form they are built from

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::ClientId;

use crate::cpf;
use crate::error::ClientError;

/// A stored insurance client
///
/// `id` is `None` only for a record that has not been saved yet; the store
/// assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: Option<ClientId>,
    pub name: String,
    /// CPF digits without punctuation
    pub cpf: String,
    pub city: String,
    /// Two-letter state abbreviation
    pub uf: String,
}

impl Client {
    /// Creates an unsaved client, normalizing the CPF
    pub fn new(
        name: impl Into<String>,
        cpf: impl AsRef<str>,
        city: impl Into<String>,
        uf: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            cpf: cpf::normalize(cpf.as_ref()),
            city: city.into(),
            uf: uf.into(),
        }
    }

    /// Sets the identifier
    pub fn with_id(mut self, id: ClientId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns true if this record has been saved
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Client fields as submitted for create or update
///
/// Every field is optional so that a missing field is reported as a
/// validation error rather than a malformed request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ClientForm {
    #[validate(
        required(code = "not_empty", message = "Nome é obrigatório"),
        length(min = 1, code = "not_empty", message = "Nome é obrigatório")
    )]
    pub name: Option<String>,

    #[validate(
        required(code = "not_empty", message = "CPF é obrigatório"),
        length(min = 1, code = "not_empty", message = "CPF é obrigatório")
    )]
    pub cpf: Option<String>,

    #[validate(
        required(code = "not_empty", message = "Cidade é obrigatória"),
        length(min = 1, code = "not_empty", message = "Cidade é obrigatória")
    )]
    pub city: Option<String>,

    #[validate(
        required(code = "not_empty", message = "Estado é obrigatório"),
        length(min = 1, code = "not_empty", message = "Estado é obrigatório")
    )]
    pub uf: Option<String>,
}

impl ClientForm {
    /// Returns the form with its CPF normalized
    pub fn normalized(mut self) -> Self {
        self.cpf = self.cpf.map(|value| cpf::normalize(&value));
        self
    }

    /// Builds the client record from a validated form
    ///
    /// Fails with `IncompleteForm` if a required field is missing, which
    /// only happens when validation was skipped.
    pub fn into_client(self, id: Option<ClientId>) -> Result<Client, ClientError> {
        let form = self.normalized();
        Ok(Client {
            id,
            name: form.name.ok_or(ClientError::IncompleteForm("name"))?,
            cpf: form.cpf.ok_or(ClientError::IncompleteForm("cpf"))?,
            city: form.city.ok_or(ClientError::IncompleteForm("city"))?,
            uf: form.uf.ok_or(ClientError::IncompleteForm("uf"))?,
        })
    }
}

impl From<Client> for ClientForm {
    fn from(client: Client) -> Self {
        Self {
            name: Some(client.name),
            cpf: Some(client.cpf),
            city: Some(client.city),
            uf: Some(client.uf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_cpf() {
        let client = Client::new("Ana", "629.840.675-17", "Recife", "PE");
        assert_eq!(client.cpf, "62984067517");
        assert!(!client.is_persisted());
    }

    #[test]
    fn test_into_client_reports_missing_field() {
        let form = ClientForm {
            name: Some("Ana".to_string()),
            ..Default::default()
        };
        let err = form.into_client(None).unwrap_err();
        assert!(matches!(err, ClientError::IncompleteForm("cpf")));
    }

    #[test]
    fn test_into_client_keeps_id() {
        let form = ClientForm::from(Client::new("Ana", "62984067517", "Recife", "PE"));
        let client = form.into_client(Some(ClientId::new("c1"))).unwrap();
        assert_eq!(client.id, Some(ClientId::new("c1")));
    }
}
