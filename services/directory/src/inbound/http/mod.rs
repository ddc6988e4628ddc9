//! HTTP inbound adapter exposing the directory's REST endpoints.

pub mod users;
