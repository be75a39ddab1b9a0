//! Policy DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use core_kernel::temporal::local_datetime;
use core_kernel::ClientId;
use domain_policy::{ClientRef, Policy, PolicyForm};

/// Reference to the client holding a policy
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ClientReference {
    pub id: Option<String>,
}

/// Body of `POST`/`PUT /api/policies`
///
/// `number` and `id` in the body are ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRequest {
    #[serde(default, deserialize_with = "local_datetime::deserialize_option")]
    #[schema(value_type = Option<String>, example = "2024-01-01T00:00:00")]
    pub effective_date_start_at: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "local_datetime::deserialize_option")]
    #[schema(value_type = Option<String>, example = "2025-01-01T00:00:00")]
    pub effective_date_end_at: Option<NaiveDateTime>,

    #[serde(default)]
    #[schema(example = "ABC1D23")]
    pub vehicle_plate: Option<String>,

    #[serde(default)]
    pub client: Option<ClientReference>,
}

impl From<PolicyRequest> for PolicyForm {
    fn from(request: PolicyRequest) -> Self {
        PolicyForm {
            number: None,
            effective_date_start_at: request.effective_date_start_at,
            effective_date_end_at: request.effective_date_end_at,
            vehicle_plate: request.vehicle_plate,
            client: request.client.map(|c| ClientRef {
                id: c.id.map(ClientId::new),
            }),
        }
    }
}

/// Show view of a policy with its expiry derived against "now"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResponse {
    pub id: Option<String>,
    pub number: i32,
    #[serde(with = "local_datetime")]
    #[schema(value_type = String, example = "2024-01-01T00:00:00")]
    pub effective_date_start_at: NaiveDateTime,
    #[serde(with = "local_datetime")]
    #[schema(value_type = String, example = "2025-01-01T00:00:00")]
    pub effective_date_end_at: NaiveDateTime,
    pub vehicle_plate: String,
    pub expired: bool,
    pub not_expired: bool,
    /// Whole days until the end of the term
    pub days_to_expire: i64,
    /// Whole days since the end of the term
    pub days_expired: i64,
}

impl PolicyResponse {
    /// Builds the view, deriving expiry against `now` (local time)
    pub fn from_policy(policy: Policy, now: NaiveDateTime) -> Self {
        let expiry = policy.expiry_status(now);
        Self {
            id: policy.id.map(|id| id.into_inner()),
            number: policy.number,
            effective_date_start_at: policy.effective_date_start_at,
            effective_date_end_at: policy.effective_date_end_at,
            vehicle_plate: policy.vehicle_plate,
            expired: expiry.expired,
            not_expired: expiry.not_expired,
            days_to_expire: expiry.days_to_expire,
            days_expired: expiry.days_expired,
        }
    }
}
