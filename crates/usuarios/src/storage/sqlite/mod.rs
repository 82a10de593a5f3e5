//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for synchronous operations and `tokio-rusqlite` to run
//! them off the async runtime threads.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
