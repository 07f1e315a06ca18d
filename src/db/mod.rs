mod contacts;
mod filter;

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;
use crate::error::Result;

pub use filter::{ClientChanges, ClientFilter};

const CREATE_CLIENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS clients (
        id SERIAL PRIMARY KEY,
        first_name TEXT,
        last_name TEXT,
        email TEXT
    )
"#;

const CREATE_PHONES: &str = r#"
    CREATE TABLE IF NOT EXISTS phones (
        client_id INTEGER REFERENCES clients(id),
        phone TEXT
    )
"#;

/// Contact store backed by a Postgres connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> Result<Self> {
        let mut options = PgConnectOptions::from_str(config.database_url())?;
        if let Some(schema) = config.schema() {
            options = options.options([("search_path", schema)]);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .acquire_timeout(config.connect_timeout())
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `clients` and `phones` tables if they do not exist yet
    pub async fn initialize(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(CREATE_CLIENTS).execute(&mut *tx).await?;
        sqlx::query(CREATE_PHONES).execute(&mut *tx).await?;

        tx.commit().await?;

        info!("contact tables ready");
        Ok(())
    }
}

/// Connect to the database and make sure the schema exists
pub async fn init(config: &Config) -> Result<Database> {
    let db = Database::new(config).await?;
    db.initialize().await?;
    Ok(db)
}
