//! Client Store Port
//!
//! `ClientPort` is everything the client domain needs from its store. The
//! PostgreSQL adapter lives in `infra_db`; an in-memory adapter is available
//! behind the `mock` feature for tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_client::{ClientPort, ClientService};
//! use std::sync::Arc;
//!
//! let port: Arc<dyn ClientPort> = Arc::new(PostgresClientAdapter::new(pool));
//! let service = ClientService::new(port);
//! ```

use async_trait::async_trait;

use core_kernel::{ClientId, DomainPort, HealthCheckable, Page, PageRequest, PortError};

use crate::client::Client;

/// Store operations for clients
///
/// Implementations must enforce CPF uniqueness on `save`, reporting a
/// violation as `PortError::Conflict`.
#[async_trait]
pub trait ClientPort: DomainPort + HealthCheckable {
    /// Inserts or replaces a client
    ///
    /// A client without an id gets a freshly generated one. The stored
    /// record is returned.
    async fn save(&self, client: Client) -> Result<Client, PortError>;

    /// Retrieves a client by id
    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, PortError>;

    /// Retrieves the client holding a (normalized) CPF
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Client>, PortError>;

    /// Retrieves every client in insertion order
    async fn find_all(&self) -> Result<Vec<Client>, PortError>;

    /// Retrieves one page of clients in insertion order
    async fn find_page(&self, request: PageRequest) -> Result<Page<Client>, PortError>;

    /// Deletes a client; deleting an unknown id is not an error
    async fn delete_by_id(&self, id: &ClientId) -> Result<(), PortError>;
}

/// Mock implementation of ClientPort for testing
///
/// Stores clients in memory, keeping insertion order so paging is stable.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};

    /// In-memory mock implementation of ClientPort
    #[derive(Debug, Default, Clone)]
    pub struct MockClientPort {
        clients: Arc<RwLock<Vec<Client>>>,
    }

    impl MockClientPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with clients for testing
        pub async fn with_clients(clients: Vec<Client>) -> Result<Self, PortError> {
            let port = Self::new();
            for client in clients {
                port.save(client).await?;
            }
            Ok(port)
        }

        /// Number of stored clients
        pub async fn len(&self) -> usize {
            self.clients.read().await.len()
        }
    }

    impl DomainPort for MockClientPort {}

    #[async_trait]
    impl HealthCheckable for MockClientPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-client-port".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl ClientPort for MockClientPort {
        async fn save(&self, mut client: Client) -> Result<Client, PortError> {
            let id = client.id.clone().unwrap_or_else(ClientId::generate);
            client.id = Some(id.clone());

            let mut clients = self.clients.write().await;
            if clients
                .iter()
                .any(|c| c.cpf == client.cpf && c.id.as_ref() != Some(&id))
            {
                return Err(PortError::conflict(format!(
                    "cpf {} is already stored",
                    client.cpf
                )));
            }

            match clients.iter_mut().find(|c| c.id.as_ref() == Some(&id)) {
                Some(existing) => *existing = client.clone(),
                None => clients.push(client.clone()),
            }
            Ok(client)
        }

        async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, PortError> {
            Ok(self
                .clients
                .read()
                .await
                .iter()
                .find(|c| c.id.as_ref() == Some(id))
                .cloned())
        }

        async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Client>, PortError> {
            Ok(self
                .clients
                .read()
                .await
                .iter()
                .find(|c| c.cpf == cpf)
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<Client>, PortError> {
            Ok(self.clients.read().await.clone())
        }

        async fn find_page(&self, request: PageRequest) -> Result<Page<Client>, PortError> {
            let clients = self.clients.read().await;
            Ok(Page::from_slice(clients.as_slice(), request))
        }

        async fn delete_by_id(&self, id: &ClientId) -> Result<(), PortError> {
            self.clients
                .write()
                .await
                .retain(|c| c.id.as_ref() != Some(id));
            Ok(())
        }
    }
}
