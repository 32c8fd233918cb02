//! Database connection pool management
//!
//! Uses sqlx PgPool sized as `pool_size + max_overflow`, with an optional
//! liveness check before each checkout.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::PoolConfig;

fn pool_options(config: &PoolConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections())
        .min_connections(0)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .test_before_acquire(config.pre_ping)
}

/// Create a PostgreSQL connection pool and open the first connection.
///
/// # Errors
///
/// Returns an error if the database cannot be reached.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&PoolConfig::default()).await?;
/// ```
pub async fn create_pool(config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        database = config.redacted_url(),
        max_connections = config.max_connections(),
        pre_ping = config.pre_ping,
        "Connecting to database"
    );

    pool_options(config).connect(&config.database_url).await
}

/// Create a pool that connects on first use.
///
/// Nothing is dialled until a query runs, so this never fails on an
/// unreachable server; only a malformed URL is an error.
pub fn create_lazy_pool(config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config).connect_lazy(&config.database_url)
}
