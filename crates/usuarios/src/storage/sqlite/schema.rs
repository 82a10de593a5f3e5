//! SQLite schema definition and SQL statement constants.
//!
//! All SQL used by the repository lives here as pure data. Column names
//! follow the existing database file layout, so a file created by earlier
//! deployments of the service stays readable.

/// SQL statement to create the users table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS usuarios (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre TEXT NOT NULL,
    correo TEXT UNIQUE NOT NULL,
    contrasena TEXT NOT NULL
);
"#;

pub const INSERT_USER: &str = r#"
INSERT INTO usuarios (nombre, correo, contrasena)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_USERS: &str = r#"
SELECT id, nombre, correo
FROM usuarios
"#;

pub const SELECT_USERS_WITH_PASSWORD: &str = r#"
SELECT id, nombre, correo, contrasena
FROM usuarios
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT id, nombre, correo
FROM usuarios
WHERE id = ?1
"#;

pub const UPDATE_USER: &str = r#"
UPDATE usuarios
SET nombre = ?2, correo = ?3
WHERE id = ?1
"#;

pub const UPDATE_USER_WITH_PASSWORD: &str = r#"
UPDATE usuarios
SET nombre = ?2, correo = ?3, contrasena = ?4
WHERE id = ?1
"#;

pub const DELETE_USER: &str = r#"
DELETE FROM usuarios
WHERE id = ?1
"#;
