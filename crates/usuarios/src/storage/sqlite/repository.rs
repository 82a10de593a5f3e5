//! SQLite repository implementation.
//!
//! Implements `usuarios_core::storage::UserRepository` using SQLite behind
//! an async connection.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use usuarios_core::storage::{RepositoryError, Result, UserRepository};
use usuarios_core::user::{NewUser, User, UserRecord, UserUpdate};

use super::conversions::{row_to_user, row_to_user_record};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Holds the single async connection opened at process start. Statements
/// are serialized on the connection's worker thread, which is the only
/// concurrency control the service relies on.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// The schema is created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let name = user.name.clone();
        let email = user.email.clone();
        let password = user.password.clone();
        let candidate_email = user.email.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_USER,
                    rusqlite::params![name, email, password],
                )
                .map_err(wrap_err)?;

                Ok(User {
                    id: conn.last_insert_rowid(),
                    name,
                    email,
                })
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, 0, &candidate_email))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_USERS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_user).map_err(wrap_err)?;

                let mut users = Vec::new();
                for row_result in rows {
                    users.push(row_result.map_err(wrap_err)?);
                }
                Ok(users)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn list_users_with_password(&self) -> Result<Vec<UserRecord>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_USERS_WITH_PASSWORD)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_user_record).map_err(wrap_err)?;

                let mut users = Vec::new();
                for row_result in rows {
                    users.push(row_result.map_err(wrap_err)?);
                }
                Ok(users)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_USER_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_user) {
                    Ok(user) => Ok(Some(user)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id, ""))
    }

    async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<usize> {
        let name = update.name.clone();
        let email = update.email.clone();
        let password = update.password.clone();
        let candidate_email = update.email.clone();

        self.conn
            .call(move |conn| {
                let rows = match password {
                    Some(password) => conn
                        .execute(
                            schema::UPDATE_USER_WITH_PASSWORD,
                            rusqlite::params![id, name, email, password],
                        )
                        .map_err(wrap_err)?,
                    None => conn
                        .execute(schema::UPDATE_USER, rusqlite::params![id, name, email])
                        .map_err(wrap_err)?,
                };
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(rows)
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id, &candidate_email))
    }

    async fn delete_user(&self, id: i64) -> Result<usize> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_USER, [id]).map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(rows)
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id, ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str, password: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_monotonic_ids() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let ana = repo
            .create_user(&new_user("Ana", "ana@x.com", "p1"))
            .await
            .unwrap();
        let luis = repo
            .create_user(&new_user("Luis", "luis@x.com", "p2"))
            .await
            .unwrap();

        assert_eq!(ana.id, 1);
        assert_eq!(luis.id, 2);
        assert_eq!(ana.name, "Ana");
        assert_eq!(ana.email, "ana@x.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_a_conflict() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        repo.create_user(&new_user("Ana", "ana@x.com", "p1"))
            .await
            .unwrap();
        let result = repo.create_user(&new_user("Otra", "ana@x.com", "p2")).await;

        assert_eq!(
            result,
            Err(RepositoryError::AlreadyExists {
                email: "ana@x.com".to_string(),
            })
        );

        // The conflicting insert must not have left a second row
        let users = repo.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_email_uniqueness_is_case_sensitive() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        repo.create_user(&new_user("Ana", "ana@x.com", "p1"))
            .await
            .unwrap();
        let result = repo.create_user(&new_user("Ana", "ANA@x.com", "p1")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_user_excludes_password_and_misses_cleanly() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let created = repo
            .create_user(&new_user("Ana", "ana@x.com", "p1"))
            .await
            .unwrap();

        let found = repo.get_user(created.id).await.unwrap();
        assert_eq!(found, Some(created));

        let missing = repo.get_user(999).await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_update_without_password_keeps_stored_password() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let created = repo
            .create_user(&new_user("Ana", "ana@x.com", "p1"))
            .await
            .unwrap();

        let changes = repo
            .update_user(
                created.id,
                &UserUpdate {
                    name: "Ana María".to_string(),
                    email: "ana@x.com".to_string(),
                    password: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(changes, 1);

        let rows = repo.list_users_with_password().await.unwrap();
        assert_eq!(rows[0].name, "Ana María");
        assert_eq!(rows[0].password, "p1");
    }

    #[tokio::test]
    async fn test_update_with_password_replaces_it() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let created = repo
            .create_user(&new_user("Ana", "ana@x.com", "p1"))
            .await
            .unwrap();

        repo.update_user(
            created.id,
            &UserUpdate {
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                password: Some("p2".to_string()),
            },
        )
        .await
        .unwrap();

        let rows = repo.list_users_with_password().await.unwrap();
        assert_eq!(rows[0].password, "p2");
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let result = repo
            .update_user(
                999,
                &UserUpdate {
                    name: "Nadie".to_string(),
                    email: "nadie@x.com".to_string(),
                    password: None,
                },
            )
            .await;

        assert_eq!(result, Err(RepositoryError::NotFound { id: 999 }));
    }

    #[tokio::test]
    async fn test_update_to_taken_email_is_a_conflict() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        repo.create_user(&new_user("Ana", "ana@x.com", "p1"))
            .await
            .unwrap();
        let luis = repo
            .create_user(&new_user("Luis", "luis@x.com", "p2"))
            .await
            .unwrap();

        let result = repo
            .update_user(
                luis.id,
                &UserUpdate {
                    name: "Luis".to_string(),
                    email: "ana@x.com".to_string(),
                    password: None,
                },
            )
            .await;

        assert_eq!(
            result,
            Err(RepositoryError::AlreadyExists {
                email: "ana@x.com".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let created = repo
            .create_user(&new_user("Ana", "ana@x.com", "p1"))
            .await
            .unwrap();

        let changes = repo.delete_user(created.id).await.unwrap();
        assert_eq!(changes, 1);

        let result = repo.delete_user(created.id).await;
        assert_eq!(result, Err(RepositoryError::NotFound { id: created.id }));
    }

    #[tokio::test]
    async fn test_schema_setup_is_idempotent() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        // Running the setup again on the same connection must not fail
        SqliteRepository::init_schema(&repo.conn).await.unwrap();
    }
}
