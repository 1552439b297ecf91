//! User store domain service.
//!
//! Implements both driving ports over the repository and directory ports.
//! Collaborator failures are logged with their cause and replaced by a
//! fixed, per-operation message so nothing internal reaches callers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    ImportSummary, UserDirectory, UserDirectoryError, UserPersistenceError, UserRepository,
    UsersCommand, UsersQuery,
};
use crate::domain::{Error, User, UserId};

/// Returned when the import fails for any reason.
pub const LOAD_FAILED: &str = "Failed to load users";
/// Returned when listing users fails.
pub const LIST_FAILED: &str = "Failed to get users";
/// Returned when fetching a single user fails.
pub const GET_FAILED: &str = "Failed to get user";
/// Returned when inserting a user fails.
pub const CREATE_FAILED: &str = "Failed to add user";
/// Returned when clearing the table fails.
pub const DELETE_ALL_FAILED: &str = "Failed to delete users";
/// Returned when deleting a single user fails.
pub const DELETE_FAILED: &str = "Failed to delete user";
/// Returned when a user id does not match a stored row.
pub const USER_NOT_FOUND: &str = "User not found";
/// Returned when creating a user whose id is already stored.
pub const USER_EXISTS: &str = "User already exists.";

/// User store service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserService<R, D> {
    repository: Arc<R>,
    directory: Arc<D>,
}

impl<R, D> UserService<R, D> {
    /// Create a new service over the given repository and directory.
    pub fn new(repository: Arc<R>, directory: Arc<D>) -> Self {
        Self {
            repository,
            directory,
        }
    }
}

fn persistence_failure(message: &'static str) -> impl FnOnce(UserPersistenceError) -> Error {
    move |err| {
        error!(error = %err, "{message}");
        Error::internal(message)
    }
}

fn directory_failure(err: UserDirectoryError) -> Error {
    error!(error = %err, "{LOAD_FAILED}");
    Error::internal(LOAD_FAILED)
}

#[async_trait]
impl<R, D> UsersQuery for UserService<R, D>
where
    R: UserRepository,
    D: UserDirectory,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list()
            .await
            .map_err(persistence_failure(LIST_FAILED))
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(persistence_failure(GET_FAILED))?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }
}

#[async_trait]
impl<R, D> UsersCommand for UserService<R, D>
where
    R: UserRepository,
    D: UserDirectory,
{
    async fn import_users(&self) -> Result<ImportSummary, Error> {
        let users = self
            .directory
            .fetch_users()
            .await
            .map_err(directory_failure)?;
        let imported = self
            .repository
            .insert_missing(&users)
            .await
            .map_err(persistence_failure(LOAD_FAILED))?;
        let summary = ImportSummary {
            fetched: users.len(),
            imported,
        };
        info!(
            fetched = summary.fetched,
            imported = summary.imported,
            skipped = summary.skipped(),
            "imported users from remote directory"
        );
        Ok(summary)
    }

    async fn create_user(&self, user: User) -> Result<User, Error> {
        let id = user.id();
        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(persistence_failure(CREATE_FAILED))?;
        if existing.is_some() {
            return Err(Error::invalid_request(USER_EXISTS));
        }

        match self.repository.insert(&user).await {
            Ok(()) => {}
            // Lost a race with a concurrent insert of the same id.
            Err(UserPersistenceError::Duplicate { .. }) => {
                return Err(Error::invalid_request(USER_EXISTS));
            }
            Err(err) => return Err(persistence_failure(CREATE_FAILED)(err)),
        }

        self.repository
            .find_by_id(id)
            .await
            .map_err(persistence_failure(CREATE_FAILED))?
            .ok_or_else(|| {
                error!(user_id = %id, "inserted user missing on read-back");
                Error::internal(CREATE_FAILED)
            })
    }

    async fn delete_all_users(&self) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete_all()
            .await
            .map_err(persistence_failure(DELETE_ALL_FAILED))?;
        info!(deleted, "deleted all users");
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(persistence_failure(DELETE_FAILED))?;
        if deleted {
            Ok(())
        } else {
            Err(Error::not_found(USER_NOT_FOUND))
        }
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
