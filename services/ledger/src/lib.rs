//! Order ledger service.
//!
//! Owns the in-memory order list and mediates user existence checks: every
//! order creation first confirms the referenced user with the user
//! directory over HTTP, then appends the order. A directory outage is
//! surfaced as a dependency failure, never disguised as "user not found".

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
