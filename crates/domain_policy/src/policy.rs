//! Policies, their submitted form and derived expiry

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::temporal::{local_datetime, whole_days_between};
use core_kernel::{ClientId, PolicyId};

use crate::error::PolicyError;

/// A stored vehicle policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: Option<PolicyId>,
    /// Unique, assigned on create and never changed
    pub number: i32,
    #[serde(with = "local_datetime")]
    pub effective_date_start_at: NaiveDateTime,
    #[serde(with = "local_datetime")]
    pub effective_date_end_at: NaiveDateTime,
    pub vehicle_plate: String,
    /// The client holding the policy; not re-checked after validation
    pub client_id: ClientId,
}

/// Expiry of a policy relative to a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryStatus {
    pub expired: bool,
    pub not_expired: bool,
    /// Whole days until the end of the term, negative once expired
    pub days_to_expire: i64,
    /// Whole days since the end of the term, negative while in force
    pub days_expired: i64,
}

impl Policy {
    /// Derives the expiry fields against `now` (local time)
    pub fn expiry_status(&self, now: NaiveDateTime) -> ExpiryStatus {
        let expired = now > self.effective_date_end_at;
        ExpiryStatus {
            expired,
            not_expired: !expired,
            days_to_expire: whole_days_between(now, self.effective_date_end_at),
            days_expired: whole_days_between(self.effective_date_end_at, now),
        }
    }
}

/// Reference to the client a policy belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientRef {
    pub id: Option<ClientId>,
}

impl ClientRef {
    pub fn new(id: ClientId) -> Self {
        Self { id: Some(id) }
    }
}

/// Policy fields as submitted for create or update
///
/// The HTTP layer never fills `number`; it is assigned on create and carried
/// over from the stored policy on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct PolicyForm {
    #[validate(required(code = "not_null", message = "Número da apólice é obrigatório"))]
    pub number: Option<i32>,

    #[validate(required(code = "not_null", message = "Data inicial de vigência é obrigatória"))]
    pub effective_date_start_at: Option<NaiveDateTime>,

    #[validate(required(code = "not_null", message = "Data final de vigência é obrigatória"))]
    pub effective_date_end_at: Option<NaiveDateTime>,

    #[validate(
        required(code = "not_empty", message = "Placa do veículo é obrigatória"),
        length(min = 1, code = "not_empty", message = "Placa do veículo é obrigatória")
    )]
    pub vehicle_plate: Option<String>,

    #[validate(required(code = "not_null", message = "Cliente é obrigatório"))]
    pub client: Option<ClientRef>,
}

impl PolicyForm {
    /// Sets the policy number
    pub fn with_number(mut self, number: i32) -> Self {
        self.number = Some(number);
        self
    }

    /// Id of the referenced client, if any
    pub fn client_id(&self) -> Option<&ClientId> {
        self.client.as_ref().and_then(|c| c.id.as_ref())
    }

    /// Builds the policy record from a validated form
    pub fn into_policy(self, id: Option<PolicyId>) -> Result<Policy, PolicyError> {
        let client_id = self
            .client
            .and_then(|c| c.id)
            .ok_or(PolicyError::IncompleteForm("client.id"))?;
        Ok(Policy {
            id,
            number: self.number.ok_or(PolicyError::IncompleteForm("number"))?,
            effective_date_start_at: self
                .effective_date_start_at
                .ok_or(PolicyError::IncompleteForm("effectiveDateStartAt"))?,
            effective_date_end_at: self
                .effective_date_end_at
                .ok_or(PolicyError::IncompleteForm("effectiveDateEndAt"))?,
            vehicle_plate: self
                .vehicle_plate
                .ok_or(PolicyError::IncompleteForm("vehiclePlate"))?,
            client_id,
        })
    }
}

impl From<Policy> for PolicyForm {
    fn from(policy: Policy) -> Self {
        Self {
            number: Some(policy.number),
            effective_date_start_at: Some(policy.effective_date_start_at),
            effective_date_end_at: Some(policy.effective_date_end_at),
            vehicle_plate: Some(policy.vehicle_plate),
            client: Some(ClientRef::new(policy.client_id)),
        }
    }
}
