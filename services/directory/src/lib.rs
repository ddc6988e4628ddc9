//! User directory service.
//!
//! Owns the canonical user records (an immutable in-memory seed set) and
//! exposes read-only lookup by identifier plus a listing endpoint. The
//! order ledger calls the lookup endpoint before accepting an order.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod server;

pub use doc::ApiDoc;
