//! Driven ports consumed by the ledger's domain services.

mod macros;
mod user_directory;

pub(crate) use macros::define_port_error;

pub use user_directory::{FixtureUserDirectory, UserDirectory, UserDirectoryError};

#[cfg(test)]
pub use user_directory::MockUserDirectory;
