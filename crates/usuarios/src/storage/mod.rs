//! Storage backend implementation.
//!
//! This module provides the concrete implementation of the repository
//! trait defined in `usuarios_core::storage`, backed by a single-file
//! SQLite database.

pub mod sqlite;

pub use sqlite::SqliteRepository;
