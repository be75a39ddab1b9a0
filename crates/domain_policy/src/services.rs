//! Policy application service
//!
//! Orchestrates `PolicyPort` and owns policy number generation.

use std::sync::Arc;

use tracing::{debug, error, info};

use core_kernel::{HealthCheckResult, Page, PageRequest, PolicyId};

use crate::error::PolicyError;
use crate::numbering::NumberSource;
use crate::policy::Policy;
use crate::ports::PolicyPort;

/// Service for managing policies
#[derive(Clone)]
pub struct PolicyService {
    port: Arc<dyn PolicyPort>,
    numbers: Arc<dyn NumberSource>,
}

impl PolicyService {
    /// Creates a service over the given store port and number source
    pub fn new(port: Arc<dyn PolicyPort>, numbers: Arc<dyn NumberSource>) -> Self {
        Self { port, numbers }
    }

    /// Draws policy numbers until one is not held by a stored policy
    ///
    /// There is no attempt limit, and the number is only reserved by the
    /// insert that follows: a concurrent create may take it first, in which
    /// case the store's unique index rejects the later insert.
    pub async fn generate_number(&self) -> Result<i32, PolicyError> {
        let mut attempts: u64 = 0;
        loop {
            let candidate = self.numbers.draw();
            attempts += 1;
            match self.port.find_by_number(candidate).await? {
                None => {
                    debug!(number = candidate, attempts, "Policy number drawn");
                    return Ok(candidate);
                }
                Some(_) => debug!(number = candidate, attempts, "Policy number taken, drawing again"),
            }
        }
    }

    /// Persists a new policy; any incoming id is discarded
    pub async fn create(&self, mut policy: Policy) -> Result<Policy, PolicyError> {
        policy.id = None;
        let saved = self
            .port
            .save(policy)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to create policy"))?;
        info!(policy_id = ?saved.id, number = saved.number, "Policy created");
        Ok(saved)
    }

    /// Replaces a stored policy; the id must already be set
    pub async fn update(&self, policy: Policy) -> Result<Policy, PolicyError> {
        let saved = self
            .port
            .save(policy)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to update policy"))?;
        info!(policy_id = ?saved.id, number = saved.number, "Policy updated");
        Ok(saved)
    }

    pub async fn find_by_id(&self, id: &PolicyId) -> Result<Option<Policy>, PolicyError> {
        debug!(policy_id = %id, "Looking up policy");
        Ok(self.port.find_by_id(id).await?)
    }

    pub async fn find_by_number(&self, number: i32) -> Result<Option<Policy>, PolicyError> {
        debug!(number, "Looking up policy by number");
        Ok(self.port.find_by_number(number).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Policy>, PolicyError> {
        Ok(self.port.find_all().await?)
    }

    pub async fn find_page(&self, request: PageRequest) -> Result<Page<Policy>, PolicyError> {
        let request = request.normalize();
        debug!(page = request.page, size = request.size, "Listing policies");
        Ok(self.port.find_page(request).await?)
    }

    pub async fn delete_by_id(&self, id: &PolicyId) -> Result<(), PolicyError> {
        self.port
            .delete_by_id(id)
            .await
            .inspect_err(|e| error!(error = %e, policy_id = %id, "Failed to delete policy"))?;
        info!(policy_id = %id, "Policy deleted");
        Ok(())
    }

    /// Runs the health check of the underlying store adapter
    pub async fn health_check(&self) -> HealthCheckResult {
        self.port.health_check().await
    }
}
