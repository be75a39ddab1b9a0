//! Health, request-id and API document endpoints

mod common;

use axum::http::{HeaderName, HeaderValue};
use serde_json::Value;

use common::TestApp;

#[tokio::test]
async fn health_reports_version() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn ready_when_stores_are_healthy() {
    let app = TestApp::new();

    let response = app.server.get("/health/ready").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ready");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;
    let id = response.header("x-request-id");
    assert!(!id.is_empty());
}

#[tokio::test]
async fn incoming_request_id_is_propagated() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/api/clients")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("trace-me"),
        )
        .await;
    assert_eq!(response.header("x-request-id"), "trace-me");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::new();

    let response = app.server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();
    let doc: Value = response.json();
    assert!(doc["paths"]["/api/policies/number/{number}"].is_object());
    assert!(doc["components"]["schemas"]["PolicyResponse"].is_object());
}
