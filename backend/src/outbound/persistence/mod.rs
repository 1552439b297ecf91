//! SQLite persistence adapters using Diesel.
//!
//! Concrete implementation of the `UserRepository` port backed by a SQLite
//! file, with async access through `diesel-async` and `bb8` pooling.
//!
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   internal; only domain types cross the port.
//! - Database failures are mapped to `UserPersistenceError`.
//!
//! # Example
//!
//! ```ignore
//! use users_service::outbound::persistence::{
//!     DbPool, DieselUserRepository, PoolConfig, ensure_schema,
//! };
//!
//! let pool = DbPool::new(PoolConfig::new("users.db")).await?;
//! ensure_schema(&pool).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::{DieselUserRepository, ensure_schema};
pub use pool::{DbConnection, DbPool, PoolConfig, PoolError};
