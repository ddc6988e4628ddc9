//! In-memory user registry.
//!
//! The registry is built once at startup from the seed set and never
//! mutated afterwards, so handlers can share it without locking. It is
//! owned by the server state and passed into handlers by reference,
//! never held as ambient global state.

use service_core::{User, UserValidationError};

/// Immutable collection of directory users keyed by their identifier.
#[derive(Debug, Clone)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Build a registry over an explicit user set.
    #[must_use]
    pub const fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Build a registry holding the default seed set.
    ///
    /// # Errors
    ///
    /// Returns an error when a seed record fails validation; this only
    /// happens if the compiled-in seed constants regress.
    pub fn with_seed() -> Result<Self, UserValidationError> {
        Ok(Self::new(seed_users()?))
    }

    /// Find a user by exact identifier match.
    ///
    /// Pure query: calling this any number of times observes the same
    /// state and changes nothing.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id().as_ref() == id)
    }

    /// All users in seed order.
    #[must_use]
    pub fn list(&self) -> &[User] {
        self.users.as_slice()
    }
}

/// Default seed set created at process start.
///
/// # Errors
///
/// Returns an error when a seed record fails validation.
pub fn seed_users() -> Result<Vec<User>, UserValidationError> {
    [
        ("1", "John Doe", "john@example.com"),
        ("2", "Jane Smith", "jane@example.com"),
        ("3", "Bob Johnson", "bob@example.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| User::try_from_strings(id, name, email))
    .collect()
}
