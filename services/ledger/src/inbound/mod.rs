//! Inbound adapters for the order ledger.

pub mod http;
