//! PostgreSQL connection pool management
//!
//! Settings come in from the caller (`shortly-common` owns env parsing); this
//! module only turns them into a pool.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Bound on waiting for a connection, so a saturated pool fails the request
/// instead of queueing it indefinitely.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection pool settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
}

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&config.url)
        .await
}
