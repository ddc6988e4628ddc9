//! Domain layer for the user directory.

mod registry;

pub use registry::{seed_users, UserRegistry};
