//! HTTP tests for `/api/policies`

mod common;

use axum::http::StatusCode;
use proptest::prelude::*;
use serde_json::{json, Value};

use common::TestApp;
use core_kernel::ClientId;
use interface_api::dto::PolicyResponse;
use test_utils::{
    assert_body_messages, assert_body_violation, plate_strategy, term_strategy,
    ClientFormBuilder, PolicyFormBuilder, TemporalFixtures,
};

async fn create_client(app: &TestApp) -> ClientId {
    let response = app
        .server
        .post("/api/clients")
        .json(&ClientFormBuilder::new().payload())
        .await;
    response.assert_status(StatusCode::CREATED);
    let id = response.json::<Value>()["id"]
        .as_str()
        .expect("id assigned")
        .to_string();
    ClientId::new(id)
}

async fn create_policy(app: &TestApp, body: Value) -> PolicyResponse {
    let response = app.server.post("/api/policies").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<PolicyResponse>()
}

#[tokio::test]
async fn create_show_and_delete() {
    let app = TestApp::new();
    let client_id = create_client(&app).await;

    let created = create_policy(&app, PolicyFormBuilder::for_client(client_id).payload()).await;
    assert!((0..domain_policy::MAX_POLICY_NUMBER).contains(&created.number));
    assert_eq!(created.vehicle_plate, "ABC1D23");
    assert_eq!(created.effective_date_start_at, TemporalFixtures::policy_start());

    let path = format!("/api/policies/{}", created.id.as_deref().unwrap());
    let shown: PolicyResponse = app.server.get(&path).await.json();
    assert_eq!(shown.number, created.number);

    let by_number = app
        .server
        .get(&format!("/api/policies/number/{}", created.number))
        .await;
    by_number.assert_status_ok();
    assert_eq!(by_number.json::<PolicyResponse>().id, created.id);

    app.server.delete(&path).await.assert_status_ok();
    app.server.get(&path).await.assert_status_not_found();
}

#[tokio::test]
async fn show_view_carries_expiry_and_no_client() {
    let app = TestApp::new();
    let client_id = create_client(&app).await;
    let created = create_policy(&app, PolicyFormBuilder::for_client(client_id).payload()).await;

    let body: Value = app
        .server
        .get(&format!("/api/policies/{}", created.id.as_deref().unwrap()))
        .await
        .json();

    for field in ["expired", "notExpired", "daysToExpire", "daysExpired", "number"] {
        assert!(body.get(field).is_some(), "missing {field}");
    }
    assert!(body.get("client").is_none());
}

#[tokio::test]
async fn colliding_numbers_are_redrawn() {
    let app = TestApp::with_sequence(vec![7, 7, 7, 9]);
    let client_id = create_client(&app).await;

    let first = create_policy(&app, PolicyFormBuilder::for_client(client_id.clone()).payload()).await;
    let second = create_policy(&app, PolicyFormBuilder::for_client(client_id).payload()).await;

    assert_eq!(first.number, 7);
    assert_eq!(second.number, 9);
}

#[tokio::test]
async fn update_keeps_number_and_ignores_body_number() {
    let app = TestApp::with_sequence(vec![11, 12]);
    let client_id = create_client(&app).await;
    let created = create_policy(&app, PolicyFormBuilder::for_client(client_id.clone()).payload()).await;

    let mut body = PolicyFormBuilder::for_client(client_id)
        .vehicle_plate("XYZ9K88")
        .payload();
    body["number"] = json!(99_999);
    body["id"] = json!("other");

    let response = app
        .server
        .put(&format!("/api/policies/{}", created.id.as_deref().unwrap()))
        .json(&body)
        .await;

    response.assert_status_ok();
    let updated: PolicyResponse = response.json();
    assert_eq!(updated.number, created.number);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.vehicle_plate, "XYZ9K88");
    assert_eq!(app.policies.len().await, 1);
}

#[tokio::test]
async fn unknown_client_is_rejected() {
    let app = TestApp::new();
    let body = PolicyFormBuilder::for_client(ClientId::new("nobody")).payload();

    let response = app.server.post("/api/policies").json(&body).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let errors: Value = response.json();
    assert_body_violation(&errors, "client", "client_not_found");
    assert_body_messages(&errors, &["Cliente não encontrado"]);
    assert_eq!(app.policies.len().await, 0);
}

#[tokio::test]
async fn client_without_id_is_rejected() {
    let app = TestApp::new();
    let body = PolicyFormBuilder::for_client(ClientId::new("unused"))
        .client_without_id()
        .payload();

    let response = app.server.post("/api/policies").json(&body).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let errors: Value = response.json();
    assert_body_violation(&errors, "client.id", "client_id_is_required");
    assert_body_messages(&errors, &["Id do Cliente é obrigatório"]);
}

#[tokio::test]
async fn missing_client_is_only_the_required_violation() {
    let app = TestApp::new();
    let body = PolicyFormBuilder::for_client(ClientId::new("unused"))
        .without_client()
        .payload();

    let response = app.server.post("/api/policies").json(&body).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_body_messages(&response.json(), &["Cliente é obrigatório"]);
}

#[tokio::test]
async fn empty_body_reports_structure_in_order() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/policies")
        .json(&json!({"effectiveDateStartAt": "", "vehiclePlate": ""}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_body_messages(
        &response.json(),
        &[
            "Data inicial de vigência é obrigatória",
            "Data final de vigência é obrigatória",
            "Placa do veículo é obrigatória",
            "Cliente é obrigatório",
        ],
    );
}

#[tokio::test]
async fn expiry_is_derived_against_now() {
    let app = TestApp::new();
    let client_id = create_client(&app).await;
    let now = app.state.timezone.now_local();

    let (start, end) = TemporalFixtures::expired_before(now);
    let expired = create_policy(
        &app,
        PolicyFormBuilder::for_client(client_id.clone()).term(start, end).payload(),
    )
    .await;
    assert!(expired.expired);
    assert!(!expired.not_expired);
    assert_eq!(expired.days_expired, 35);

    let (start, end) = TemporalFixtures::in_force_around(now);
    let in_force = create_policy(
        &app,
        PolicyFormBuilder::for_client(client_id).term(start, end).payload(),
    )
    .await;
    assert!(!in_force.expired);
    assert!(in_force.not_expired);
    // a few milliseconds pass between `now` and the request
    assert!((334..=335).contains(&in_force.days_to_expire));
}

#[tokio::test]
async fn deleting_the_client_leaves_the_policy() {
    let app = TestApp::new();
    let client_id = create_client(&app).await;
    let created = create_policy(&app, PolicyFormBuilder::for_client(client_id.clone()).payload()).await;

    app.server
        .delete(&format!("/api/clients/{client_id}"))
        .await
        .assert_status_ok();

    app.server
        .get(&format!("/api/policies/{}", created.id.as_deref().unwrap()))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn lookups_by_number() {
    let app = TestApp::new();

    app.server
        .get("/api/policies/number/123")
        .await
        .assert_status_not_found();
    app.server
        .get("/api/policies/number/abc")
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = TestApp::new();
    let client_id = create_client(&app).await;
    let body = PolicyFormBuilder::for_client(client_id).payload();

    app.server.get("/api/policies/missing").await.assert_status_not_found();
    app.server
        .put("/api/policies/missing")
        .json(&body)
        .await
        .assert_status_not_found();
    app.server.delete("/api/policies/missing").await.assert_status_not_found();
}

#[tokio::test]
async fn list_is_paged() {
    let app = TestApp::with_sequence(vec![1, 2, 3]);
    let client_id = create_client(&app).await;
    for _ in 0..3 {
        create_policy(&app, PolicyFormBuilder::for_client(client_id.clone()).payload()).await;
    }

    let response = app
        .server
        .get("/api/policies")
        .add_query_param("size", 2)
        .await;
    response.assert_status_ok();
    let page: Value = response.json();

    let numbers: Vec<i64> = page["content"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["number"].as_i64())
        .collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["first"], true);
    assert_eq!(page["last"], false);
}

#[tokio::test]
async fn list_defaults_to_twenty_per_page() {
    let app = TestApp::new();

    let page: Value = app.server.get("/api/policies").await.json();
    assert_eq!(page["size"], 20);
    assert_eq!(page["number"], 0);

    let response = app
        .server
        .get("/api/policies")
        .add_query_param("page", -1)
        .add_query_param("size", 0)
        .await;
    response.assert_status_ok();
    let page: Value = response.json();
    assert_eq!(page["number"], 0);
    assert_eq!(page["size"], 20);

    let response = app
        .server
        .get("/api/policies")
        .add_query_param("page", "abc")
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["number"], 0);
}

#[tokio::test]
async fn malformed_date_is_a_bad_request() {
    let app = TestApp::new();
    let client_id = create_client(&app).await;
    let mut body = PolicyFormBuilder::for_client(client_id).payload();
    body["effectiveDateEndAt"] = json!("31/12/2024");

    let response = app.server.post("/api/policies").json(&body).await;
    response.assert_status_bad_request();
    assert_eq!(app.policies.len().await, 0);
}

#[tokio::test]
async fn minutes_precision_dates_are_accepted() {
    let app = TestApp::new();
    let client_id = create_client(&app).await;
    let mut body = PolicyFormBuilder::for_client(client_id).payload();
    body["effectiveDateStartAt"] = json!("2024-01-01T08:30");

    let created = create_policy(&app, body).await;
    let json = serde_json::to_value(&created).unwrap();
    assert_eq!(json["effectiveDateStartAt"], "2024-01-01T08:30:00");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn stored_term_and_plate_are_shown_back(
        (start, end) in term_strategy(),
        plate in plate_strategy(),
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (created, now) = runtime.block_on(async {
            let app = TestApp::new();
            let client_id = create_client(&app).await;
            let body = PolicyFormBuilder::for_client(client_id)
                .term(start, end)
                .vehicle_plate(plate.clone())
                .payload();
            let created = create_policy(&app, body).await;
            (created, app.state.timezone.now_local())
        });

        prop_assert_eq!(created.effective_date_start_at, start);
        prop_assert_eq!(created.effective_date_end_at, end);
        prop_assert_eq!(created.vehicle_plate, plate);
        prop_assert_eq!(created.expired, now > end);
        prop_assert_eq!(created.not_expired, !created.expired);
    }
}
