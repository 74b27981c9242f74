//! Application State Management
//!
//! This module defines the application state structure and implements the
//! `FromRef` traits for Axum state extraction.
//!
//! # Architecture
//!
//! `AppState` is the central state container: the SQLite connection pool
//! and the actor directory built on top of it. Both are constructed once
//! at startup (dependency injection, not module-level globals) and shared
//! across all request handlers.
//!
//! # Thread Safety
//!
//! `SqlitePool` is internally reference-counted and thread-safe; the
//! directory only holds a pool clone. Cloning `AppState` is cheap.

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::directory::ActorDirectory;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// `None` if the database is not configured (no `DATABASE_URL`).
    /// Handlers report a storage error in that case.
    pub db_pool: Option<SqlitePool>,

    /// Actor directory over the same pool
    pub directory: Option<ActorDirectory>,
}

impl AppState {
    /// Build the state for a given (optional) pool
    pub fn new(db_pool: Option<SqlitePool>) -> Self {
        let directory = db_pool.clone().map(ActorDirectory::new);
        Self { db_pool, directory }
    }
}

/// Allow handlers to extract `Option<SqlitePool>` directly
impl FromRef<AppState> for Option<SqlitePool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to extract the directory directly
impl FromRef<AppState> for Option<ActorDirectory> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.directory.clone()
    }
}
