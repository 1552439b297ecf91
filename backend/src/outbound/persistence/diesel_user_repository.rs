//! SQLite-backed `UserRepository` implementation using Diesel.
//!
//! Every port method issues exactly one statement. Bulk import relies on
//! `INSERT OR IGNORE` so rows whose id already exists are left untouched and
//! do not count towards the imported total.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{RunQueryDsl, SimpleAsyncConnection};
use tracing::warn;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    username TEXT NOT NULL,
    email TEXT NOT NULL
);";

/// Create the `users` table if it does not already exist.
///
/// Safe to call on every start-up.
///
/// # Errors
///
/// Returns [`UserPersistenceError`] when no connection is available or the
/// DDL fails.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), UserPersistenceError> {
    let mut conn = pool.get().await.map_err(map_pool_error)?;
    conn.batch_execute(CREATE_USERS_TABLE)
        .await
        .map_err(|err| map_diesel_error(err, None))
}

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let id = row.id;
    User::try_from(row).map_err(|err| {
        warn!(user_id = id, error = %err, "stored user row violates invariants");
        UserPersistenceError::query(format!("invalid stored user {id}: {err}"))
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;
        rows.into_iter().map(row_to_user).collect()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;
        row.map(row_to_user).transpose()
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = user.id().get();
        diesel::insert_into(users::table)
            .values(NewUserRow::from(user))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(id)))?;
        Ok(())
    }

    async fn insert_missing(&self, batch: &[User]) -> Result<usize, UserPersistenceError> {
        if batch.is_empty() {
            return Ok(0);
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // SQLite batch inserts are not available through the async wrapper,
        // so each row is its own statement.
        let mut inserted = 0;
        for user in batch {
            inserted += diesel::insert_or_ignore_into(users::table)
                .values(NewUserRow::from(user))
                .execute(&mut conn)
                .await
                .map_err(|err| map_diesel_error(err, None))?;
        }
        Ok(inserted)
    }

    async fn delete_all(&self) -> Result<usize, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(users::table)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))
    }

    async fn delete_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(users::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;
        Ok(deleted > 0)
    }
}
