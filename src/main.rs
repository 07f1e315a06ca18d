use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use contacts_manager::cli::{self, Cli};
use contacts_manager::config;
use contacts_manager::db::Database;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = config::init()?;

    // Connect without touching the schema; `init` and `demo` create it
    let db = Database::new(&config).await?;

    cli::run(&db, cli.command).await?;

    Ok(())
}
