//! Client application service
//!
//! Thin orchestration over `ClientPort`. Handlers clone the service freely;
//! clones share the same port.

use std::sync::Arc;

use tracing::{debug, error, info};

use core_kernel::{ClientId, HealthCheckResult, Page, PageRequest};

use crate::client::Client;
use crate::cpf;
use crate::error::ClientError;
use crate::ports::ClientPort;

/// Service for managing clients
#[derive(Clone)]
pub struct ClientService {
    port: Arc<dyn ClientPort>,
}

impl ClientService {
    /// Creates a service over the given store port
    pub fn new(port: Arc<dyn ClientPort>) -> Self {
        Self { port }
    }

    /// Persists a new client
    ///
    /// Any id on the input is discarded so the store assigns a fresh one.
    pub async fn create(&self, mut client: Client) -> Result<Client, ClientError> {
        client.id = None;
        let saved = self
            .port
            .save(client)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to create client"))?;
        info!(client_id = ?saved.id, "Client created");
        Ok(saved)
    }

    /// Replaces a stored client; the id must already be set
    pub async fn update(&self, client: Client) -> Result<Client, ClientError> {
        let saved = self
            .port
            .save(client)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to update client"))?;
        info!(client_id = ?saved.id, "Client updated");
        Ok(saved)
    }

    pub async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, ClientError> {
        debug!(client_id = %id, "Looking up client");
        Ok(self.port.find_by_id(id).await?)
    }

    /// Looks up a client by CPF, punctuated or not
    pub async fn find_by_cpf(&self, raw_cpf: &str) -> Result<Option<Client>, ClientError> {
        let normalized = cpf::normalize(raw_cpf);
        debug!(cpf = %normalized, "Looking up client by cpf");
        Ok(self.port.find_by_cpf(&normalized).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Client>, ClientError> {
        Ok(self.port.find_all().await?)
    }

    pub async fn find_page(&self, request: PageRequest) -> Result<Page<Client>, ClientError> {
        let request = request.normalize();
        debug!(page = request.page, size = request.size, "Listing clients");
        Ok(self.port.find_page(request).await?)
    }

    pub async fn delete_by_id(&self, id: &ClientId) -> Result<(), ClientError> {
        self.port
            .delete_by_id(id)
            .await
            .inspect_err(|e| error!(error = %e, client_id = %id, "Failed to delete client"))?;
        info!(client_id = %id, "Client deleted");
        Ok(())
    }

    /// Runs the health check of the underlying store adapter
    pub async fn health_check(&self) -> HealthCheckResult {
        self.port.health_check().await
    }
}
