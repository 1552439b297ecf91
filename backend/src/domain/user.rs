//! User data model.
//!
//! A user is a flat record keyed by a caller-supplied integer identifier.
//! Construction only checks presence: identifiers must be positive and the
//! three text fields must be non-blank.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`User::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    InvalidId,
    MissingField { field: &'static str },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "user id must be a positive integer"),
            Self::MissingField { field } => write!(f, "user {field} must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Primary key of a stored user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: i64) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Raw integer value as stored in the `users` table.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Stored user record.
///
/// ## Invariants
/// - `id` is a positive integer.
/// - `name`, `username`, and `email` are non-empty once trimmed.
///
/// # Examples
/// ```
/// use users_service::domain::User;
///
/// let user = User::try_new(1, "Leanne Graham", "Bret", "Sincere@april.biz")
///     .expect("valid user");
/// assert_eq!(user.id().get(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    name: String,
    username: String,
    email: String,
}

impl User {
    /// Fallible constructor enforcing the presence invariants.
    pub fn try_new(
        id: i64,
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let id = UserId::new(id)?;
        let name = required("name", name.into())?;
        let username = required("username", username.into())?;
        let email = required("email", email.into())?;
        Ok(Self {
            id,
            name,
            username,
            email,
        })
    }

    /// Primary key.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Full name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Login handle.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Contact address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

fn required(field: &'static str, value: String) -> Result<String, UserValidationError> {
    if value.trim().is_empty() {
        return Err(UserValidationError::MissingField { field });
    }
    Ok(value)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDto {
    id: i64,
    name: String,
    username: String,
    email: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            name,
            username,
            email,
        } = value;
        Self {
            id: id.get(),
            name,
            username,
            email,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_new(value.id, value.name, value.username, value.email)
    }
}
