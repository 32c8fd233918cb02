//! items CLI - runs and provisions the items API
//!
//! - `items serve` starts the HTTP server
//! - `items init-db` creates the schema and exits
//!
//! A `.env` file in the working directory is loaded before flags are parsed.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::init_db::InitDbArgs;
use commands::serve::ServeArgs;
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "items",
    author,
    version,
    about = "CRUD HTTP service for items backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),

    /// Create the items table and index if missing
    InitDb(InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Env file must be loaded before clap reads env-backed flags
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }
    Ok(())
}
