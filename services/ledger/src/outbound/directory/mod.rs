//! Reqwest-backed user directory adapter.

mod dto;
mod http_client;

pub use http_client::{HttpUserDirectory, DEFAULT_LOOKUP_TIMEOUT};
