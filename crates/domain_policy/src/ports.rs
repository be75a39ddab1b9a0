//! Policy Store Port
//!
//! Mirrors `domain_client::ports`: a store trait with a PostgreSQL adapter
//! in `infra_db` and an in-memory adapter behind the `mock` feature.

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, Page, PageRequest, PolicyId, PortError};

use crate::policy::Policy;

/// Store operations for policies
///
/// Implementations must enforce policy number uniqueness on `save`,
/// reporting a violation as `PortError::Conflict`.
#[async_trait]
pub trait PolicyPort: DomainPort + HealthCheckable {
    /// Inserts or replaces a policy, generating an id when absent
    async fn save(&self, policy: Policy) -> Result<Policy, PortError>;

    async fn find_by_id(&self, id: &PolicyId) -> Result<Option<Policy>, PortError>;

    async fn find_by_number(&self, number: i32) -> Result<Option<Policy>, PortError>;

    /// Retrieves every policy in insertion order
    async fn find_all(&self) -> Result<Vec<Policy>, PortError>;

    /// Retrieves one page of policies in insertion order
    async fn find_page(&self, request: PageRequest) -> Result<Page<Policy>, PortError>;

    /// Deletes a policy; deleting an unknown id is not an error
    async fn delete_by_id(&self, id: &PolicyId) -> Result<(), PortError>;
}

/// Mock implementation of PolicyPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};

    /// In-memory mock implementation of PolicyPort
    #[derive(Debug, Default, Clone)]
    pub struct MockPolicyPort {
        policies: Arc<RwLock<Vec<Policy>>>,
    }

    impl MockPolicyPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with policies for testing
        pub async fn with_policies(policies: Vec<Policy>) -> Result<Self, PortError> {
            let port = Self::new();
            for policy in policies {
                port.save(policy).await?;
            }
            Ok(port)
        }

        pub async fn len(&self) -> usize {
            self.policies.read().await.len()
        }
    }

    impl DomainPort for MockPolicyPort {}

    #[async_trait]
    impl HealthCheckable for MockPolicyPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-policy-port".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl PolicyPort for MockPolicyPort {
        async fn save(&self, mut policy: Policy) -> Result<Policy, PortError> {
            let id = policy.id.clone().unwrap_or_else(PolicyId::generate);
            policy.id = Some(id.clone());

            let mut policies = self.policies.write().await;
            if policies
                .iter()
                .any(|p| p.number == policy.number && p.id.as_ref() != Some(&id))
            {
                return Err(PortError::conflict(format!(
                    "policy number {} is already stored",
                    policy.number
                )));
            }

            match policies.iter_mut().find(|p| p.id.as_ref() == Some(&id)) {
                Some(existing) => *existing = policy.clone(),
                None => policies.push(policy.clone()),
            }
            Ok(policy)
        }

        async fn find_by_id(&self, id: &PolicyId) -> Result<Option<Policy>, PortError> {
            Ok(self
                .policies
                .read()
                .await
                .iter()
                .find(|p| p.id.as_ref() == Some(id))
                .cloned())
        }

        async fn find_by_number(&self, number: i32) -> Result<Option<Policy>, PortError> {
            Ok(self
                .policies
                .read()
                .await
                .iter()
                .find(|p| p.number == number)
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<Policy>, PortError> {
            Ok(self.policies.read().await.clone())
        }

        async fn find_page(&self, request: PageRequest) -> Result<Page<Policy>, PortError> {
            let policies = self.policies.read().await;
            Ok(Page::from_slice(policies.as_slice(), request))
        }

        async fn delete_by_id(&self, id: &PolicyId) -> Result<(), PortError> {
            self.policies
                .write()
                .await
                .retain(|p| p.id.as_ref() != Some(id));
            Ok(())
        }
    }
}
