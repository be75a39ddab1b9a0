//! Client handlers

use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use core_kernel::{ClientId, Page};
use domain_client::ClientForm;

use crate::dto::{ClientRequest, ClientResponse, PageParams, CLIENT_PAGE_SIZE};
use crate::error::ApiError;
use crate::validation::EntityForm;
use crate::AppState;

/// Lists clients, one page at a time
#[utoipa::path(
    get, path = "/api/clients", tag = "clients",
    params(PageParams),
    responses(
        (status = 200, description = "Page of clients", body = crate::openapi::ClientPageDoc)
    )
)]
pub async fn list_clients(
    State(state): State<AppState>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Page<ClientResponse>>, ApiError> {
    let params = query.map(|Query(params)| params).unwrap_or_default();
    let page = state
        .clients
        .find_page(params.to_request(CLIENT_PAGE_SIZE))
        .await?;
    Ok(Json(page.map(ClientResponse::from)))
}

/// Gets a client by id
#[utoipa::path(
    get, path = "/api/clients/{id}", tag = "clients",
    params(("id" = String, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client", body = ClientResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClientResponse>, ApiError> {
    let id = ClientId::new(id);
    let client = state.clients.find_by_id(&id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(client.into()))
}

/// Creates a client
#[utoipa::path(
    post, path = "/api/clients", tag = "clients",
    request_body = ClientRequest,
    responses(
        (status = 201, description = "Created", body = ClientResponse),
        (status = 400, description = "Malformed body"),
        (status = 409, description = "CPF taken concurrently"),
        (status = 422, description = "Violations", body = [crate::openapi::FieldErrorDoc])
    )
)]
pub async fn create_client(
    State(state): State<AppState>,
    payload: Result<Json<ClientRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ClientResponse>), ApiError> {
    let Json(request) = payload?;
    let form = ClientForm::from(request);

    EntityForm::Client { form: &form, id: None }
        .ensure_valid(&state)
        .await?;

    let client = state.clients.create(form.into_client(None)?).await?;
    Ok((StatusCode::CREATED, Json(client.into())))
}

/// Replaces a client's fields
#[utoipa::path(
    put, path = "/api/clients/{id}", tag = "clients",
    params(("id" = String, Path, description = "Client id")),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Updated", body = ClientResponse),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Not found"),
        (status = 422, description = "Violations", body = [crate::openapi::FieldErrorDoc])
    )
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ClientRequest>, JsonRejection>,
) -> Result<Json<ClientResponse>, ApiError> {
    let id = ClientId::new(id);
    if state.clients.find_by_id(&id).await?.is_none() {
        debug!(client_id = %id, "Update of unknown client");
        return Err(ApiError::NotFound);
    }

    let Json(request) = payload?;
    let form = ClientForm::from(request);

    EntityForm::Client { form: &form, id: Some(&id) }
        .ensure_valid(&state)
        .await?;

    let client = state.clients.update(form.into_client(Some(id))?).await?;
    Ok(Json(client.into()))
}

/// Deletes a client
#[utoipa::path(
    delete, path = "/api/clients/{id}", tag = "clients",
    params(("id" = String, Path, description = "Client id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = ClientId::new(id);
    if state.clients.find_by_id(&id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    state.clients.delete_by_id(&id).await?;
    Ok(StatusCode::OK)
}
