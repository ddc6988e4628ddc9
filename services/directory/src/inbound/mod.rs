//! Inbound adapters for the user directory.

pub mod http;
