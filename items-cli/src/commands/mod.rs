//! Command implementations for the items CLI

use clap::Args;

use items_server::config::{DEFAULT_MAX_OVERFLOW, DEFAULT_POOL_SIZE};
use items_server::PoolConfig;

pub mod init_db;
pub mod serve;

pub use init_db::run_init_db;
pub use serve::run_serve;

/// Connection pool flags shared by every command that talks to PostgreSQL
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Connections kept for steady-state load
    #[arg(long, env = "ITEMS_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pub pool_size: u32,

    /// Extra connections allowed under burst load
    #[arg(long, env = "ITEMS_POOL_MAX_OVERFLOW", default_value_t = DEFAULT_MAX_OVERFLOW)]
    pub max_overflow: u32,

    /// Skip the liveness check on pooled connections
    #[arg(long)]
    pub no_pre_ping: bool,
}

impl DatabaseArgs {
    pub fn pool_config(&self) -> PoolConfig {
        let defaults = PoolConfig::default();
        PoolConfig {
            database_url: self.database_url.clone().unwrap_or(defaults.database_url),
            pool_size: self.pool_size,
            max_overflow: self.max_overflow,
            pre_ping: !self.no_pre_ping,
            ..defaults
        }
    }
}
