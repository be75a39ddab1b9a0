//! HTTP API Layer
//!
//! This crate provides the REST API of the client and policy registry using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for clients, policies and health
//! - **Validation**: `EntityForm` dispatch over the per-entity validators
//! - **Middleware**: Request ids, tracing, request logging
//! - **DTOs**: Request/Response views of each entity
//! - **Error Handling**: Consistent status codes and error bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(client_service, policy_service, config.timezone);
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod openapi;
pub mod validation;

use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::Timezone;
use domain_client::ClientService;
use domain_policy::PolicyService;

use crate::handlers::{clients, health, policies};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub clients: ClientService,
    pub policies: PolicyService,
    /// Jurisdiction used as "now" for derived policy fields
    pub timezone: Timezone,
}

impl AppState {
    pub fn new(clients: ClientService, policies: PolicyService, timezone: Timezone) -> Self {
        Self { clients, policies, timezone }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Services and settings shared by every handler
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Operational routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api-docs/openapi.json", get(openapi::openapi_json));

    // Client routes
    let client_routes = Router::new()
        .route("/", get(clients::list_clients).post(clients::create_client))
        .route(
            "/:id",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        );

    // Policy routes
    let policy_routes = Router::new()
        .route("/", get(policies::list_policies).post(policies::create_policy))
        .route("/number/:number", get(policies::get_policy_by_number))
        .route(
            "/:id",
            get(policies::get_policy)
                .put(policies::update_policy)
                .delete(policies::delete_policy),
        );

    let api_routes = Router::new()
        .nest("/clients", client_routes)
        .nest("/policies", policy_routes);

    // Combine all routes; the request id is set before anything logs
    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
