//! Driving port for user mutations, including the remote import.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Outcome of one import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    /// Records returned by the remote directory.
    pub fetched: usize,
    /// Records newly written; the rest already existed.
    pub imported: usize,
}

impl ImportSummary {
    /// Records skipped because their id was already stored.
    pub fn skipped(&self) -> usize {
        self.fetched.saturating_sub(self.imported)
    }
}

/// Domain use-case port for writing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Fetch the remote directory and insert every user not yet stored.
    async fn import_users(&self) -> Result<ImportSummary, Error>;

    /// Insert a new user and return the stored record.
    ///
    /// Fails with an invalid-request error when the id is already taken.
    async fn create_user(&self, user: User) -> Result<User, Error>;

    /// Remove every user.
    async fn delete_all_users(&self) -> Result<(), Error>;

    /// Remove one user, or fail with a not-found error.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
