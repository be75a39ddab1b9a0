//! Policy handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::debug;

use core_kernel::{Page, PolicyId};
use domain_policy::PolicyForm;

use crate::dto::{PageParams, PolicyRequest, PolicyResponse, POLICY_PAGE_SIZE};
use crate::error::ApiError;
use crate::validation::EntityForm;
use crate::AppState;

/// Lists policies, one page at a time
#[utoipa::path(
    get, path = "/api/policies", tag = "policies",
    params(PageParams),
    responses(
        (status = 200, description = "Page of policies", body = crate::openapi::PolicyPageDoc)
    )
)]
pub async fn list_policies(
    State(state): State<AppState>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Page<PolicyResponse>>, ApiError> {
    let params = query.map(|Query(params)| params).unwrap_or_default();
    let now = state.timezone.now_local();
    let page = state
        .policies
        .find_page(params.to_request(POLICY_PAGE_SIZE))
        .await?;
    Ok(Json(page.map(|policy| PolicyResponse::from_policy(policy, now))))
}

/// Gets a policy by id
#[utoipa::path(
    get, path = "/api/policies/{id}", tag = "policies",
    params(("id" = String, Path, description = "Policy id")),
    responses(
        (status = 200, description = "Policy", body = PolicyResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_policy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let policy = state
        .policies
        .find_by_id(&PolicyId::new(id))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(PolicyResponse::from_policy(policy, state.timezone.now_local())))
}

/// Gets a policy by its number
#[utoipa::path(
    get, path = "/api/policies/number/{number}", tag = "policies",
    params(("number" = i32, Path, description = "Policy number")),
    responses(
        (status = 200, description = "Policy", body = PolicyResponse),
        (status = 400, description = "Number is not an integer"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_policy_by_number(
    State(state): State<AppState>,
    number: Result<Path<i32>, PathRejection>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let Path(number) = number?;
    let policy = state
        .policies
        .find_by_number(number)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(PolicyResponse::from_policy(policy, state.timezone.now_local())))
}

/// Creates a policy under a freshly drawn number
#[utoipa::path(
    post, path = "/api/policies", tag = "policies",
    request_body = PolicyRequest,
    responses(
        (status = 201, description = "Created", body = PolicyResponse),
        (status = 400, description = "Malformed body"),
        (status = 409, description = "Number taken concurrently"),
        (status = 422, description = "Violations", body = [crate::openapi::FieldErrorDoc])
    )
)]
pub async fn create_policy(
    State(state): State<AppState>,
    payload: Result<Json<PolicyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PolicyResponse>), ApiError> {
    let Json(request) = payload?;
    let number = state.policies.generate_number().await?;
    let form = PolicyForm::from(request).with_number(number);

    EntityForm::Policy(&form).ensure_valid(&state).await?;

    let policy = state.policies.create(form.into_policy(None)?).await?;
    let response = PolicyResponse::from_policy(policy, state.timezone.now_local());
    Ok((StatusCode::CREATED, Json(response)))
}

/// Replaces a policy's term, plate and client; the number is kept
#[utoipa::path(
    put, path = "/api/policies/{id}", tag = "policies",
    params(("id" = String, Path, description = "Policy id")),
    request_body = PolicyRequest,
    responses(
        (status = 200, description = "Updated", body = PolicyResponse),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Not found"),
        (status = 422, description = "Violations", body = [crate::openapi::FieldErrorDoc])
    )
)]
pub async fn update_policy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PolicyRequest>, JsonRejection>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let id = PolicyId::new(id);
    let Some(existing) = state.policies.find_by_id(&id).await? else {
        debug!(policy_id = %id, "Update of unknown policy");
        return Err(ApiError::NotFound);
    };

    let Json(request) = payload?;
    let form = PolicyForm::from(request).with_number(existing.number);

    EntityForm::Policy(&form).ensure_valid(&state).await?;

    let policy = state.policies.update(form.into_policy(Some(id))?).await?;
    Ok(Json(PolicyResponse::from_policy(policy, state.timezone.now_local())))
}

/// Deletes a policy
#[utoipa::path(
    delete, path = "/api/policies/{id}", tag = "policies",
    params(("id" = String, Path, description = "Policy id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_policy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = PolicyId::new(id);
    if state.policies.find_by_id(&id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    state.policies.delete_by_id(&id).await?;
    Ok(StatusCode::OK)
}
