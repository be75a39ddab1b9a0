//! PostgreSQL adapter tests
//!
//! These start a PostgreSQL container and need Docker:
//! `cargo test -p infra_db -- --ignored`.

use core_kernel::{ClientId, HealthCheckable, PageRequest};
use domain_client::{Client, ClientPort};
use domain_policy::PolicyPort;
use infra_db::{PostgresClientAdapter, PostgresPolicyAdapter};
use test_utils::{create_isolated_test_database, ClientFixtures, CpfFixtures, PolicyBuilder, TestDatabase};

// Each test owns its container: a pool cannot outlive the runtime of the
// test that opened it.
async fn database() -> TestDatabase {
    create_isolated_test_database().await.unwrap()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_client_save_assigns_id_and_reads_back() {
    let db = database().await;
    let adapter = PostgresClientAdapter::new(db.pool().clone());

    let saved = adapter.save(ClientFixtures::maria()).await.unwrap();
    let id = saved.id.clone().unwrap();

    let found = adapter.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(found, saved);
    assert_eq!(found.cpf, CpfFixtures::valid_bare());
    assert!(adapter.find_by_cpf(CpfFixtures::valid_bare()).await.unwrap().is_some());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_client_cpf_unique_index_is_conflict() {
    let db = database().await;
    let adapter = PostgresClientAdapter::new(db.pool().clone());

    adapter.save(ClientFixtures::maria()).await.unwrap();
    let err = adapter.save(ClientFixtures::maria()).await.unwrap_err();
    assert!(err.is_conflict(), "{err}");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_client_upsert_replaces_fields() {
    let db = database().await;
    let adapter = PostgresClientAdapter::new(db.pool().clone());

    let mut saved = adapter.save(ClientFixtures::maria()).await.unwrap();
    saved.city = "Pelotas".to_string();
    let updated = adapter.save(saved.clone()).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.city, "Pelotas");
    assert_eq!(adapter.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_client_paging_and_delete() {
    let db = database().await;
    let adapter = PostgresClientAdapter::new(db.pool().clone());

    for (i, cpf) in CpfFixtures::VALID.iter().enumerate() {
        adapter
            .save(Client::new(format!("Client {i}"), cpf, "Recife", "PE"))
            .await
            .unwrap();
    }

    let page = adapter.find_page(PageRequest::new(1, 3)).await.unwrap();
    assert_eq!(page.total_elements, 4);
    assert_eq!(page.number_of_elements, 1);
    assert!(page.last);

    let victim = page.content[0].id.clone().unwrap();
    adapter.delete_by_id(&victim).await.unwrap();
    assert!(adapter.find_by_id(&victim).await.unwrap().is_none());

    db.clear_data().await.unwrap();
    assert!(adapter.find_all().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_policy_number_unique_and_lookup() {
    let db = database().await;
    let adapter = PostgresPolicyAdapter::new(db.pool().clone());
    let client_id = ClientId::new("dangling-client");

    let saved = adapter.save(PolicyBuilder::new(4242, client_id.clone()).build()).await.unwrap();
    let found = adapter.find_by_number(4242).await.unwrap().unwrap();
    assert_eq!(found, saved);
    assert_eq!(found.client_id, client_id);

    let err = adapter
        .save(PolicyBuilder::new(4242, client_id).build())
        .await
        .unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_adapters_report_healthy() {
    let db = database().await;
    let clients = PostgresClientAdapter::new(db.pool().clone());
    let policies = PostgresPolicyAdapter::new(db.pool().clone());

    assert!(clients.health_check().await.is_operational());
    assert!(policies.health_check().await.is_operational());
}
