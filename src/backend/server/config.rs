//! Server Configuration
//!
//! This module handles loading of server configuration, focusing on the
//! SQLite connection pool.
//!
//! # Configuration Sources
//!
//! Configuration is read from environment variables (`DATABASE_URL`,
//! `SERVER_PORT`), loaded from a `.env` file when present.
//!
//! # Error Handling
//!
//! Configuration errors are logged but do not prevent server startup.
//! Without a database the server still answers the health probe; the
//! messaging handlers report a storage error.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Embedded schema migrations (`migrations/` directory)
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Database configuration result
///
/// `None` when the database is not configured or unreachable.
pub type DatabaseConfig = Option<SqlitePool>;

/// Load and initialize the database connection pool
///
/// Reads `DATABASE_URL`, creates the pool (creating the database file if
/// missing) and runs migrations. The pool has a single process-wide
/// lifecycle: created here at startup, dropped at shutdown.
///
/// # Returns
///
/// - `Some(SqlitePool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Storage features will be disabled.");
            return None;
        }
    };

    let options = match SqliteConnectOptions::from_str(&database_url) {
        Ok(options) => options.create_if_missing(true),
        Err(e) => {
            tracing::error!("Invalid DATABASE_URL: {:?}", e);
            tracing::warn!("Storage features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Storage features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match MIGRATOR.run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            // The schema may already be in place from a previous run.
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}
