//! Driven port for the remote, read-only user directory consumed by imports.
//!
//! The domain only sees validated [`User`] records; transport and payload
//! details stay inside the adapter.

use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while fetching the remote user list.
    pub enum UserDirectoryError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "user directory transport failed: {message}",
        /// The request exceeded the configured timeout.
        Timeout { message: String } =>
            "user directory timed out: {message}",
        /// The directory answered with a non-success status.
        Status { status: u16, message: String } =>
            "user directory returned status {status}: {message}",
        /// The response body was not a valid user list.
        Decode { message: String } =>
            "user directory payload could not be decoded: {message}",
    }
}

/// Port for reading the full remote user list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch every user the directory publishes.
    async fn fetch_users(&self) -> Result<Vec<User>, UserDirectoryError>;
}

/// Fixture directory returning a fixed pair of users.
///
/// Used by integration tests and local runs without network access.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureUserDirectory;

impl FixtureUserDirectory {
    fn users() -> Result<Vec<User>, UserDirectoryError> {
        let fixtures = [
            (1, "Leanne Graham", "Bret", "Sincere@april.biz"),
            (2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
        ];
        fixtures
            .into_iter()
            .map(|(id, name, username, email)| {
                User::try_new(id, name, username, email).map_err(|err| {
                    UserDirectoryError::decode(format!("invalid fixture user: {err}"))
                })
            })
            .collect()
    }
}

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn fetch_users(&self) -> Result<Vec<User>, UserDirectoryError> {
        Self::users()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_directory_returns_two_users() {
        let users = FixtureUserDirectory
            .fetch_users()
            .await
            .expect("fixture users");
        let ids: Vec<i64> = users.iter().map(|user| user.id().get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[rstest]
    fn status_errors_render_code_and_message() {
        let err = UserDirectoryError::status(503_u16, "maintenance");
        assert_eq!(
            err.to_string(),
            "user directory returned status 503: maintenance"
        );
    }
}
