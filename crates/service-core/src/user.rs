//! User data model shared by the directory and the ledger.
//!
//! The directory serves these records; the ledger's lookup client decodes
//! them off the wire. Identifiers are caller-assigned opaque strings (the
//! seed set uses `"1"`, `"2"`, ...), so validation stops at presence
//! checks rather than imposing a format.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Validation errors returned by the [`User`] constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier carried surrounding whitespace.
    #[error("user id must not have surrounding whitespace")]
    PaddedId,
    /// The name was empty once trimmed.
    #[error("user name must not be empty")]
    EmptyName,
    /// The email was empty once trimmed.
    #[error("user email must not be empty")]
    EmptyEmail,
}

/// Caller-assigned user identifier.
///
/// Opaque and unconstrained beyond being non-empty with no surrounding
/// whitespace; it is NOT required to be a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::PaddedId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A directory user record.
///
/// ## Invariants
/// - `id` is non-empty with no surrounding whitespace.
/// - `name` and `email` are non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    #[schema(value_type = String, example = "1")]
    id: UserId,
    #[schema(example = "John Doe")]
    name: String,
    #[schema(example = "john@example.com")]
    email: String,
}

impl User {
    /// Build a [`User`] from a validated identifier plus name and email.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self { id, name, email })
    }

    /// Fallible constructor from raw string inputs.
    pub fn try_from_strings(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Self::new(UserId::new(id)?, name, email)
    }

    /// Stable caller-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Full name of the user.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email of the user.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Wire shape of a user record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
struct UserDto {
    id: String,
    name: String,
    email: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, name, email } = value;
        Self {
            id: id.into(),
            name,
            email,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_strings(value.id, value.name, value.email)
    }
}
