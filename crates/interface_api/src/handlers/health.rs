//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use core_kernel::HealthCheckResult;

use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Health check endpoint
#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

/// Readiness check (includes both stores)
#[utoipa::path(
    get, path = "/health/ready", tag = "health",
    responses(
        (status = 200, description = "Stores reachable", body = HealthResponse),
        (status = 503, description = "A store is unavailable", body = HealthResponse)
    )
)]
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let (clients, policies) =
        tokio::join!(state.clients.health_check(), state.policies.health_check());

    let failing: Vec<&HealthCheckResult> = [&clients, &policies]
        .into_iter()
        .filter(|check| !check.is_operational())
        .collect();

    if failing.is_empty() {
        return (StatusCode::OK, Json(HealthResponse::new("ready")));
    }

    for check in failing {
        warn!(
            adapter = %check.adapter_id,
            message = ?check.message,
            "Store not ready"
        );
    }
    (StatusCode::SERVICE_UNAVAILABLE, Json(HealthResponse::new("unavailable")))
}
