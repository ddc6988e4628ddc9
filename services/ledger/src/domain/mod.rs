//! Domain layer for the order ledger.

mod ledger;
mod order;
pub mod ports;

pub use ledger::{OrderDetail, OrderLedger};
pub use order::{Order, OrderDraft, OrderId, OrderValidationError};
