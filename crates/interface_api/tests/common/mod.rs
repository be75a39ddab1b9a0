//! Shared setup for the HTTP tests

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;

use core_kernel::Timezone;
use domain_client::{ClientService, MockClientPort};
use domain_policy::{MockPolicyPort, NumberSource, PolicyService, SequenceNumberSource};
use interface_api::{create_router, AppState};

/// A server over empty in-memory stores
pub struct TestApp {
    pub server: TestServer,
    pub clients: MockClientPort,
    pub policies: MockPolicyPort,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_numbers(Arc::new(domain_policy::FakeNumberSource))
    }

    /// Policy numbers replay `numbers` in order
    pub fn with_sequence(numbers: Vec<i32>) -> Self {
        Self::with_numbers(Arc::new(SequenceNumberSource::new(numbers)))
    }

    fn with_numbers(numbers: Arc<dyn NumberSource>) -> Self {
        test_utils::init_test_tracing();

        let clients = MockClientPort::new();
        let policies = MockPolicyPort::new();
        let state = AppState::new(
            ClientService::new(Arc::new(clients.clone())),
            PolicyService::new(Arc::new(policies.clone()), numbers),
            Timezone::default(),
        );
        let server = TestServer::new(create_router(state.clone())).expect("test server");

        Self { server, clients, policies, state }
    }
}
