//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`UsersQuery`, `UsersCommand`) are what inbound adapters
//! call. Driven ports (`UserRepository`, `UserDirectory`) are what the
//! domain calls out to; outbound adapters implement them.

mod macros;
pub(crate) use macros::define_port_error;

mod user_directory;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{FixtureUserDirectory, UserDirectory, UserDirectoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::{ImportSummary, UsersCommand};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
