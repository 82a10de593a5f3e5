//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use rusqlite::Row;

use usuarios_core::user::{User, UserRecord};

/// Convert a SQLite row to a User.
///
/// Expected columns: id, nombre, correo
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}

/// Convert a SQLite row to a full UserRecord.
///
/// Expected columns: id, nombre, correo, contrasena
pub fn row_to_user_record(row: &Row) -> rusqlite::Result<UserRecord> {
    Ok(UserRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
    })
}
