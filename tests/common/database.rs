//! Test database helper
//!
//! Provides a migrated SQLite database per test. The default is an
//! in-memory database on a single-connection pool; tests that need real
//! connection-level concurrency use the file-backed variant.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tempfile::TempDir;

use stafflink::backend::server::config::MIGRATOR;

pub struct TestDatabase {
    pool: SqlitePool,
    _tempdir: Option<TempDir>,
}

impl TestDatabase {
    /// In-memory database, single connection
    pub async fn new() -> Self {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("valid sqlite url");
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .connect_with(options)
            .await
            .expect("failed to open in-memory database");

        MIGRATOR.run(&pool).await.expect("migrations failed");

        Self {
            pool,
            _tempdir: None,
        }
    }

    /// File-backed database with a multi-connection pool, for tests that
    /// exercise concurrent writers
    pub async fn new_file_backed() -> Self {
        let tempdir = TempDir::new().expect("failed to create temp dir");
        let path = tempdir.path().join("stafflink-test.db");

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(options)
            .await
            .expect("failed to open file-backed database");

        MIGRATOR.run(&pool).await.expect("migrations failed");

        Self {
            pool,
            _tempdir: Some(tempdir),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
