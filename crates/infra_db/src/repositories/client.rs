//! Client repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::DatabaseError;

const CLIENT_COLUMNS: &str = "id, name, cpf, city, uf, created_at, updated_at";

/// A row of the `clients` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ClientRow {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub city: String,
    pub uf: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column values written by an upsert
#[derive(Debug, Clone)]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub city: String,
    pub uf: String,
}

/// Repository for the `clients` table
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts the record or replaces the row with the same id
    ///
    /// `created_at` is kept on replace. A CPF held by another row fails with
    /// `DatabaseError::DuplicateEntry`.
    pub async fn upsert(&self, record: ClientRecord) -> Result<ClientRow, DatabaseError> {
        let sql = format!(
            r#"
            INSERT INTO clients (id, name, cpf, city, uf, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                cpf = EXCLUDED.cpf,
                city = EXCLUDED.city,
                uf = EXCLUDED.uf,
                updated_at = NOW()
            RETURNING {CLIENT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ClientRow>(&sql)
            .bind(&record.id)
            .bind(&record.name)
            .bind(&record.cpf)
            .bind(&record.city)
            .bind(&record.uf)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<ClientRow>, DatabaseError> {
        let sql = format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1");
        let row = sqlx::query_as::<_, ClientRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn find_by_cpf(&self, cpf: &str) -> Result<Option<ClientRow>, DatabaseError> {
        let sql = format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE cpf = $1");
        let row = sqlx::query_as::<_, ClientRow>(&sql)
            .bind(cpf)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn find_all(&self) -> Result<Vec<ClientRow>, DatabaseError> {
        let sql = format!("SELECT {CLIENT_COLUMNS} FROM clients ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, ClientRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// One slice of the table in creation order
    pub async fn find_slice(&self, limit: i64, offset: i64) -> Result<Vec<ClientRow>, DatabaseError> {
        let sql = format!(
            "SELECT {CLIENT_COLUMNS} FROM clients ORDER BY created_at, id LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, ClientRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Returns the number of deleted rows (0 or 1)
    pub async fn delete(&self, id: &str) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
