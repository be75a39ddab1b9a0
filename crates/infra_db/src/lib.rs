//! Infrastructure Database Layer
//!
//! PostgreSQL storage for the client and policy registry using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: repositories own the SQL and
//! row types, adapters implement the domain port traits on top of them and
//! translate errors into `PortError`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig};
//! use infra_db::adapters::PostgresClientAdapter;
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/insurance")).await?;
//! run_migrations(&pool).await?;
//! let clients = PostgresClientAdapter::new(pool.clone());
//! ```

pub mod pool;
pub mod error;
pub mod schema;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, DatabaseConfig};
pub use error::DatabaseError;
pub use schema::run_migrations;
pub use adapters::{PostgresClientAdapter, PostgresPolicyAdapter};
