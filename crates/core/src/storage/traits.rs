use async_trait::async_trait;

use crate::user::{NewUser, User, UserRecord, UserUpdate};

use super::Result;

/// Repository for user operations.
///
/// The storage handle lives behind an implementation of this trait;
/// handlers only ever see the trait object, which is what lets tests swap
/// in an in-memory database.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user and returns it with the storage-assigned id.
    ///
    /// A duplicate email fails with [`RepositoryError::AlreadyExists`].
    ///
    /// [`RepositoryError::AlreadyExists`]: super::RepositoryError::AlreadyExists
    async fn create_user(&self, user: &NewUser) -> Result<User>;

    /// Lists all users in storage order, passwords excluded.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Lists all users including their stored passwords.
    ///
    /// Development inspection only. Never expose this on a production
    /// route.
    async fn list_users_with_password(&self) -> Result<Vec<UserRecord>>;

    /// Gets a user by id, password excluded.
    async fn get_user(&self, id: i64) -> Result<Option<User>>;

    /// Updates name and email, and the password only when one is provided.
    ///
    /// Returns the number of affected rows; zero matched rows fails with
    /// [`RepositoryError::NotFound`].
    ///
    /// [`RepositoryError::NotFound`]: super::RepositoryError::NotFound
    async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<usize>;

    /// Deletes a user by id.
    ///
    /// Returns the number of affected rows; zero matched rows fails with
    /// [`RepositoryError::NotFound`].
    ///
    /// [`RepositoryError::NotFound`]: super::RepositoryError::NotFound
    async fn delete_user(&self, id: i64) -> Result<usize>;
}
