//! Environment-driven database selection.
//!
//! The production environment talks to Postgres over SSL with bounded pool
//! sizes; every other environment uses a local SQLite file that is created on
//! demand. The mapping is static — nothing here inspects the data, it only
//! hands out a connected pool.

use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::config::Config;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(60);

/// A connected pool for whichever backend the environment selected.
#[derive(Debug, Clone)]
pub enum Database {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl Database {
    /// Connect according to the environment: Postgres in production, SQLite
    /// otherwise.
    pub async fn connect(config: &Config) -> Result<Self> {
        if config.is_production() {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL not set")?;

            let options = PgConnectOptions::from_str(url)
                .context("Invalid DATABASE_URL")?
                .ssl_mode(PgSslMode::Require);

            let pool = PgPoolOptions::new()
                .min_connections(config.database_pool_min)
                .max_connections(config.database_pool_max)
                .acquire_timeout(ACQUIRE_TIMEOUT)
                .connect_with(options)
                .await
                .context("Failed to connect to Postgres")?;

            info!(
                min = config.database_pool_min,
                max = config.database_pool_max,
                "connected to Postgres"
            );
            Ok(Database::Postgres(pool))
        } else {
            let filename = &config.database_filename;
            if let Some(parent) = Path::new(filename).parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .context("Failed to create database directory")?;
                }
            }

            let options = SqliteConnectOptions::new()
                .filename(filename)
                .create_if_missing(true);

            // SQLite doesn't handle concurrent writes well
            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(options)
                .await
                .context("Failed to connect to SQLite")?;

            info!(path = %filename, "connected to SQLite");
            Ok(Database::Sqlite(pool))
        }
    }

    /// Backend name for logs and the health endpoint.
    pub fn client_name(&self) -> &'static str {
        match self {
            Database::Postgres(_) => "postgres",
            Database::Sqlite(_) => "sqlite",
        }
    }

    /// Round-trip a trivial query to confirm the connection is alive.
    pub async fn ping(&self) -> Result<()> {
        match self {
            Database::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
            Database::Sqlite(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
        }
        Ok(())
    }
}
