//! Driven port for confirming users against the directory service.
//!
//! The domain owns the lookup contract so order orchestration stays
//! adapter-agnostic: `Ok(Some(user))` means the directory confirmed the
//! user, `Ok(None)` means it explicitly answered "not found", and `Err`
//! means the directory could not give an answer at all. Callers must keep
//! the last two apart; collapsing an outage into "not found" misleads
//! clients about whose identifier is wrong.

use async_trait::async_trait;
use service_core::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while calling the user directory.
    ///
    /// Every variant represents the directory being unreachable in the
    /// sense of the lookup contract; none of them implies the user is
    /// absent.
    pub enum UserDirectoryError {
        /// Network transport failed before receiving a response.
        Transport => "user directory transport failed: {message}",
        /// The lookup call exceeded its timeout.
        Timeout => "user directory timed out: {message}",
        /// The directory answered with a failure status.
        UpstreamStatus => "user directory returned failure status: {message}",
        /// The directory response could not be decoded.
        Decode => "user directory response decode failed: {message}",
    }
}

/// Port for querying the user directory.
///
/// Pure query: implementations perform no retries and cache nothing, so
/// calling it twice with the same identifier changes no state anywhere.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up one user by identifier.
    async fn lookup_user(&self, id: &UserId) -> Result<Option<User>, UserDirectoryError>;
}

/// In-memory directory fixture answering from a fixed user set.
///
/// Used by integration tests and local wiring that should not perform
/// network calls.
#[derive(Debug, Clone, Default)]
pub struct FixtureUserDirectory {
    users: Vec<User>,
}

impl FixtureUserDirectory {
    /// Build a fixture over an explicit user set.
    #[must_use]
    pub const fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn lookup_user(&self, id: &UserId) -> Result<Option<User>, UserDirectoryError> {
        Ok(self.users.iter().find(|user| user.id() == id).cloned())
    }
}
