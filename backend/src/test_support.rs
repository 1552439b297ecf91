//! Test utilities shared by unit and integration tests.
//!
//! Compiled only with the `test-support` feature.

use tempfile::TempDir;

use crate::outbound::persistence::{DbPool, PoolConfig, ensure_schema};

/// SQLite database in a private temporary directory.
///
/// The directory, and with it the database file, is removed on drop, so keep
/// the value alive for as long as the pool is used.
pub struct TempDatabase {
    _dir: TempDir,
    pool: DbPool,
}

impl TempDatabase {
    /// Create a fresh database with the `users` table in place.
    ///
    /// # Errors
    ///
    /// Returns a description of the failing step.
    pub async fn new() -> Result<Self, String> {
        let dir = tempfile::tempdir().map_err(|err| format!("create temp dir: {err}"))?;
        let path = dir.path().join("users.db");
        let pool = DbPool::new(PoolConfig::new(path.to_string_lossy()).with_max_size(2))
            .await
            .map_err(|err| err.to_string())?;
        ensure_schema(&pool).await.map_err(|err| err.to_string())?;
        Ok(Self { _dir: dir, pool })
    }

    /// Pool connected to the temporary database.
    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
