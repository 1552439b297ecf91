//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A row with the same primary key already exists.
        Duplicate { id: i64 } => "user {id} already exists",
    }
}

/// Storage for the `users` table.
///
/// Every method maps to a single statement; adapters must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user ordered by id ascending.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new user, failing with [`UserPersistenceError::Duplicate`]
    /// when the id is taken.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Insert each user whose id is absent, leaving existing rows untouched.
    ///
    /// Returns the number of rows actually inserted.
    async fn insert_missing(&self, users: &[User]) -> Result<usize, UserPersistenceError>;

    /// Remove every user, returning the number of deleted rows.
    async fn delete_all(&self) -> Result<usize, UserPersistenceError>;

    /// Remove one user. Returns `false` when no row matched.
    async fn delete_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
