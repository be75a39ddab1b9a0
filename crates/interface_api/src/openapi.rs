//! OpenAPI document served at `/api-docs/openapi.json`

use axum::Json;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::dto::{ClientReference, ClientRequest, ClientResponse, PolicyRequest, PolicyResponse};
use crate::handlers::health::HealthResponse;

/// One violation in a 422 body
#[derive(Serialize, ToSchema)]
pub struct FieldErrorDoc {
    #[schema(example = "cpf")]
    pub field: String,
    #[schema(example = "cpf_invalid")]
    pub code: String,
    #[schema(example = "CPF inválido")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientPageDoc {
    pub content: Vec<ClientResponse>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
    pub number_of_elements: u64,
    pub empty: bool,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicyPageDoc {
    pub content: Vec<PolicyResponse>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
    pub number_of_elements: u64,
    pub empty: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::health::readiness_check,
        crate::handlers::clients::list_clients,
        crate::handlers::clients::get_client,
        crate::handlers::clients::create_client,
        crate::handlers::clients::update_client,
        crate::handlers::clients::delete_client,
        crate::handlers::policies::list_policies,
        crate::handlers::policies::get_policy,
        crate::handlers::policies::get_policy_by_number,
        crate::handlers::policies::create_policy,
        crate::handlers::policies::update_policy,
        crate::handlers::policies::delete_policy,
    ),
    components(
        schemas(
            HealthResponse,
            ClientRequest,
            ClientResponse,
            ClientReference,
            PolicyRequest,
            PolicyResponse,
            FieldErrorDoc,
            ClientPageDoc,
            PolicyPageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "clients"),
        (name = "policies")
    )
)]
pub struct ApiDoc;

/// Serves the generated document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
