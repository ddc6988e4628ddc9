//! Outbound adapters for the order ledger.

pub mod directory;

pub use directory::{HttpUserDirectory, DEFAULT_LOOKUP_TIMEOUT};
