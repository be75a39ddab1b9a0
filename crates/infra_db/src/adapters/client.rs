//! PostgreSQL Client Adapter

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{ClientId, DomainPort, HealthCheckResult, HealthCheckable, Page, PageRequest, PortError};
use domain_client::{Client, ClientPort};

use crate::adapters::limit_offset;
use crate::pool::check_health;
use crate::repositories::client::{ClientRecord, ClientRepository, ClientRow};

/// PostgreSQL-backed implementation of `ClientPort`
#[derive(Debug, Clone)]
pub struct PostgresClientAdapter {
    repository: ClientRepository,
    pool: PgPool,
}

impl PostgresClientAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClientRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresClientAdapter {}

#[async_trait]
impl HealthCheckable for PostgresClientAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        check_health(&self.pool, "postgres-client-adapter").await
    }
}

#[async_trait]
impl ClientPort for PostgresClientAdapter {
    #[instrument(skip(self, client), fields(client_id = ?client.id))]
    async fn save(&self, client: Client) -> Result<Client, PortError> {
        let id = client.id.unwrap_or_else(ClientId::generate);
        let record = ClientRecord {
            id: id.into_inner(),
            name: client.name,
            cpf: client.cpf,
            city: client.city,
            uf: client.uf,
        };
        let row = self.repository.upsert(record).await?;
        debug!(client_id = %row.id, "Client row written");
        Ok(row_to_client(row))
    }

    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, PortError> {
        Ok(self.repository.find_by_id(id.as_str()).await?.map(row_to_client))
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Client>, PortError> {
        Ok(self.repository.find_by_cpf(cpf).await?.map(row_to_client))
    }

    async fn find_all(&self) -> Result<Vec<Client>, PortError> {
        let rows = self.repository.find_all().await?;
        Ok(rows.into_iter().map(row_to_client).collect())
    }

    #[instrument(skip(self))]
    async fn find_page(&self, request: PageRequest) -> Result<Page<Client>, PortError> {
        let request = request.normalize();
        let (limit, offset) = limit_offset(request);
        let rows = self.repository.find_slice(limit, offset).await?;
        let total = self.repository.count().await?;
        let content = rows.into_iter().map(row_to_client).collect();
        Ok(Page::new(content, request, u64::try_from(total).unwrap_or(0)))
    }

    async fn delete_by_id(&self, id: &ClientId) -> Result<(), PortError> {
        let deleted = self.repository.delete(id.as_str()).await?;
        debug!(client_id = %id, deleted, "Client row deleted");
        Ok(())
    }
}

fn row_to_client(row: ClientRow) -> Client {
    Client {
        id: Some(ClientId::new(row.id)),
        name: row.name,
        cpf: row.cpf,
        city: row.city,
        uf: row.uf,
    }
}
