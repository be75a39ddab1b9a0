//! PostgreSQL Policy Adapter

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{ClientId, DomainPort, HealthCheckResult, HealthCheckable, Page, PageRequest, PolicyId, PortError};
use domain_policy::{Policy, PolicyPort};

use crate::adapters::limit_offset;
use crate::pool::check_health;
use crate::repositories::policy::{PolicyRecord, PolicyRepository, PolicyRow};

/// PostgreSQL-backed implementation of `PolicyPort`
#[derive(Debug, Clone)]
pub struct PostgresPolicyAdapter {
    repository: PolicyRepository,
    pool: PgPool,
}

impl PostgresPolicyAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PolicyRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresPolicyAdapter {}

#[async_trait]
impl HealthCheckable for PostgresPolicyAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        check_health(&self.pool, "postgres-policy-adapter").await
    }
}

#[async_trait]
impl PolicyPort for PostgresPolicyAdapter {
    #[instrument(skip(self, policy), fields(policy_id = ?policy.id, number = policy.number))]
    async fn save(&self, policy: Policy) -> Result<Policy, PortError> {
        let id = policy.id.unwrap_or_else(PolicyId::generate);
        let record = PolicyRecord {
            id: id.into_inner(),
            number: policy.number,
            effective_date_start_at: policy.effective_date_start_at,
            effective_date_end_at: policy.effective_date_end_at,
            vehicle_plate: policy.vehicle_plate,
            client_id: policy.client_id.into_inner(),
        };
        let row = self.repository.upsert(record).await?;
        debug!(policy_id = %row.id, "Policy row written");
        Ok(row_to_policy(row))
    }

    async fn find_by_id(&self, id: &PolicyId) -> Result<Option<Policy>, PortError> {
        Ok(self.repository.find_by_id(id.as_str()).await?.map(row_to_policy))
    }

    async fn find_by_number(&self, number: i32) -> Result<Option<Policy>, PortError> {
        Ok(self.repository.find_by_number(number).await?.map(row_to_policy))
    }

    async fn find_all(&self) -> Result<Vec<Policy>, PortError> {
        let rows = self.repository.find_all().await?;
        Ok(rows.into_iter().map(row_to_policy).collect())
    }

    #[instrument(skip(self))]
    async fn find_page(&self, request: PageRequest) -> Result<Page<Policy>, PortError> {
        let request = request.normalize();
        let (limit, offset) = limit_offset(request);
        let rows = self.repository.find_slice(limit, offset).await?;
        let total = self.repository.count().await?;
        let content = rows.into_iter().map(row_to_policy).collect();
        Ok(Page::new(content, request, u64::try_from(total).unwrap_or(0)))
    }

    async fn delete_by_id(&self, id: &PolicyId) -> Result<(), PortError> {
        let deleted = self.repository.delete(id.as_str()).await?;
        debug!(policy_id = %id, deleted, "Policy row deleted");
        Ok(())
    }
}

fn row_to_policy(row: PolicyRow) -> Policy {
    Policy {
        id: Some(PolicyId::new(row.id)),
        number: row.number,
        effective_date_start_at: row.effective_date_start_at,
        effective_date_end_at: row.effective_date_end_at,
        vehicle_plate: row.vehicle_plate,
        client_id: ClientId::new(row.client_id),
    }
}
