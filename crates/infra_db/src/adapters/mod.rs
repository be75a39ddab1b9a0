//! Domain Adapters
//!
//! PostgreSQL implementations of the domain store ports. Each adapter wraps
//! a repository, converts rows to domain records and `DatabaseError` to
//! `PortError`.
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresClientAdapter;
//! use domain_client::ClientPort;
//!
//! let port: Arc<dyn ClientPort> = Arc::new(PostgresClientAdapter::new(pool));
//! ```

pub mod client;
pub mod policy;

pub use client::PostgresClientAdapter;
pub use policy::PostgresPolicyAdapter;

use core_kernel::PageRequest;

/// Converts a page request to SQL `LIMIT` and `OFFSET` values
pub(crate) fn limit_offset(request: PageRequest) -> (i64, i64) {
    let limit = i64::try_from(request.limit()).unwrap_or(i64::MAX);
    let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
    (limit, offset)
}
