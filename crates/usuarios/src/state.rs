//! Application state with repository-based storage.
//!
//! The repository handle is constructed once at process start and injected
//! here, instead of living as process-global state. Handlers receive a
//! clone of this state on every request.

use std::sync::Arc;

use usuarios_core::storage::UserRepository;

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
///
/// Cloned for each request handler; holds the repository trait object so
/// tests can run against an in-memory store.
#[derive(Clone)]
pub struct AppState {
    /// User repository backing all CRUD operations.
    pub user_repo: Arc<dyn UserRepository>,
}

impl AppState {
    /// Creates AppState with a file-backed SQLite store.
    ///
    /// Opens the database and runs the idempotent schema setup, so every
    /// handler can assume the table exists.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = SqliteRepository::new(&config.sqlite_path).await?;

        Ok(Self {
            user_repo: Arc::new(repo),
        })
    }
}
