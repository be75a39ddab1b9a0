//! Client DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use domain_client::{Client, ClientForm};

/// Body of `POST`/`PUT /api/clients`; an `id` in the body is ignored
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ClientRequest {
    #[schema(example = "Maria Souza")]
    pub name: Option<String>,
    /// Punctuation (`.` and `-`) is stripped before storing
    #[schema(example = "728.687.544-22")]
    pub cpf: Option<String>,
    #[schema(example = "Porto Alegre")]
    pub city: Option<String>,
    #[schema(example = "RS")]
    pub uf: Option<String>,
}

impl From<ClientRequest> for ClientForm {
    fn from(request: ClientRequest) -> Self {
        ClientForm {
            name: request.name,
            cpf: request.cpf,
            city: request.city,
            uf: request.uf,
        }
        .normalized()
    }
}

/// Show view of a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientResponse {
    pub id: Option<String>,
    pub name: String,
    #[schema(example = "72868754422")]
    pub cpf: String,
    pub city: String,
    pub uf: String,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.map(|id| id.into_inner()),
            name: client.name,
            cpf: client.cpf,
            city: client.city,
            uf: client.uf,
        }
    }
}
