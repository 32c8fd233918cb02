//! Create the items table and index, then exit.

use anyhow::{Context, Result};
use clap::Parser;

use items_server::db::{create_pool, schema};

use super::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool_config = args.database.pool_config();

    let pool = create_pool(&pool_config)
        .await
        .with_context(|| format!("Failed to connect to {}", pool_config.redacted_url()))?;

    let result = schema::ensure(&pool).await.context("Failed to create schema");
    pool.close().await;
    result?;

    tracing::info!(database = pool_config.redacted_url(), "Schema is up to date");
    Ok(())
}
