//! Diesel and pool error mapping for the user repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserPersistenceError;

use super::pool::PoolError;

/// Map pool errors to connection failures.
pub(super) fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to repository failures.
///
/// `duplicate_id` is the key being written, if any; a unique violation is
/// only reported as [`UserPersistenceError::Duplicate`] when it is known.
pub(super) fn map_diesel_error(
    error: DieselError,
    duplicate_id: Option<i64>,
) -> UserPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match (error, duplicate_id) {
        (DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _), Some(id)) => {
            UserPersistenceError::duplicate(id)
        }
        (DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _), _) => {
            UserPersistenceError::connection("database connection error")
        }
        (DieselError::DatabaseError(_, info), _) => {
            UserPersistenceError::query(info.message().to_owned())
        }
        (DieselError::NotFound, _) => UserPersistenceError::query("record not found"),
        (DieselError::QueryBuilderError(_), _) => {
            UserPersistenceError::query("database query error")
        }
        (DieselError::DeserializationError(err), _) => {
            UserPersistenceError::query(format!("row decode failed: {err}"))
        }
        _ => UserPersistenceError::query("database error"),
    }
}
