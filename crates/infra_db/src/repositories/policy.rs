//! Policy repository

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::PgPool;

use crate::error::DatabaseError;

const POLICY_COLUMNS: &str = "id, number, effective_date_start_at, effective_date_end_at, \
                              vehicle_plate, client_id, created_at, updated_at";

/// A row of the `policies` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PolicyRow {
    pub id: String,
    pub number: i32,
    pub effective_date_start_at: NaiveDateTime,
    pub effective_date_end_at: NaiveDateTime,
    pub vehicle_plate: String,
    pub client_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column values written by an upsert
#[derive(Debug, Clone)]
pub struct PolicyRecord {
    pub id: String,
    pub number: i32,
    pub effective_date_start_at: NaiveDateTime,
    pub effective_date_end_at: NaiveDateTime,
    pub vehicle_plate: String,
    pub client_id: String,
}

/// Repository for the `policies` table
#[derive(Debug, Clone)]
pub struct PolicyRepository {
    pool: PgPool,
}

impl PolicyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts the record or replaces the row with the same id
    ///
    /// A number held by another row fails with `DatabaseError::DuplicateEntry`.
    pub async fn upsert(&self, record: PolicyRecord) -> Result<PolicyRow, DatabaseError> {
        let sql = format!(
            r#"
            INSERT INTO policies (
                id, number, effective_date_start_at, effective_date_end_at,
                vehicle_plate, client_id, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            ON CONFLICT (id) DO UPDATE SET
                number = EXCLUDED.number,
                effective_date_start_at = EXCLUDED.effective_date_start_at,
                effective_date_end_at = EXCLUDED.effective_date_end_at,
                vehicle_plate = EXCLUDED.vehicle_plate,
                client_id = EXCLUDED.client_id,
                updated_at = NOW()
            RETURNING {POLICY_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, PolicyRow>(&sql)
            .bind(&record.id)
            .bind(record.number)
            .bind(record.effective_date_start_at)
            .bind(record.effective_date_end_at)
            .bind(&record.vehicle_plate)
            .bind(&record.client_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<PolicyRow>, DatabaseError> {
        let sql = format!("SELECT {POLICY_COLUMNS} FROM policies WHERE id = $1");
        let row = sqlx::query_as::<_, PolicyRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn find_by_number(&self, number: i32) -> Result<Option<PolicyRow>, DatabaseError> {
        let sql = format!("SELECT {POLICY_COLUMNS} FROM policies WHERE number = $1");
        let row = sqlx::query_as::<_, PolicyRow>(&sql)
            .bind(number)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn find_all(&self) -> Result<Vec<PolicyRow>, DatabaseError> {
        let sql = format!("SELECT {POLICY_COLUMNS} FROM policies ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, PolicyRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_slice(&self, limit: i64, offset: i64) -> Result<Vec<PolicyRow>, DatabaseError> {
        let sql = format!(
            "SELECT {POLICY_COLUMNS} FROM policies ORDER BY created_at, id LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, PolicyRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM policies")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn delete(&self, id: &str) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM policies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
