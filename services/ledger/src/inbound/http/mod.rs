//! HTTP inbound adapter exposing the ledger's REST endpoints.

pub mod orders;
