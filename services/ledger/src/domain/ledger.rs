//! Order ledger domain service.
//!
//! Owns the in-memory order list behind an async mutex: Actix schedules
//! handlers across a multi-threaded runtime, so appends need explicit
//! single-writer arbitration rather than relying on event-loop accidents.
//! The lookup call is awaited before the lock is taken, so the mutex only
//! guards the append and reads.

use std::sync::Arc;

use service_core::{DomainError, User};
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::order::{Order, OrderDraft, OrderId};
use super::ports::{UserDirectory, UserDirectoryError};

/// An order joined with the current directory view of its user.
///
/// `user` is `None` when the directory no longer knows the identifier;
/// existence was only guaranteed at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    /// The stored order.
    pub order: Order,
    /// The user as the directory reports it now, if still present.
    pub user: Option<User>,
}

/// Domain service mediating order creation and queries.
pub struct OrderLedger {
    directory: Arc<dyn UserDirectory>,
    orders: Mutex<Vec<Order>>,
}

impl OrderLedger {
    /// Build a ledger backed by the given directory port.
    #[must_use]
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            directory,
            orders: Mutex::new(Vec::new()),
        }
    }

    /// Accept a new order once the referenced user is confirmed.
    ///
    /// # Errors
    ///
    /// - [`service_core::ErrorCode::NotFound`] when the directory answers
    ///   that the user does not exist; nothing is appended.
    /// - [`service_core::ErrorCode::DependencyFailure`] when the directory
    ///   could not be reached; nothing is appended. This is deliberately
    ///   distinct from the not-found case.
    pub async fn create_order(&self, draft: OrderDraft) -> Result<Order, DomainError> {
        let user = self
            .directory
            .lookup_user(draft.user_id())
            .await
            .map_err(map_lookup_error)?;
        if user.is_none() {
            return Err(DomainError::not_found("User not found"));
        }

        let order = Order::new(OrderId::random(), draft);
        let mut orders = self.orders.lock().await;
        orders.push(order.clone());
        info!(order_id = %order.id(), user_id = %order.user_id(), "order accepted");
        Ok(order)
    }

    /// All accepted orders in arrival order.
    pub async fn list_orders(&self) -> Vec<Order> {
        self.orders.lock().await.clone()
    }

    /// Number of accepted orders.
    pub async fn order_count(&self) -> usize {
        self.orders.lock().await.len()
    }

    /// Fetch one order joined with the directory's current view of its
    /// user.
    ///
    /// # Errors
    ///
    /// - [`service_core::ErrorCode::NotFound`] when no such order exists.
    /// - [`service_core::ErrorCode::DependencyFailure`] when the user
    ///   enrichment lookup fails.
    pub async fn order_detail(&self, id: OrderId) -> Result<OrderDetail, DomainError> {
        let order = {
            let orders = self.orders.lock().await;
            orders.iter().find(|order| order.id() == id).cloned()
        };
        let order = order.ok_or_else(|| DomainError::not_found("Order not found"))?;

        let user = self
            .directory
            .lookup_user(order.user_id())
            .await
            .map_err(map_lookup_error)?;
        Ok(OrderDetail { order, user })
    }
}

fn map_lookup_error(err: UserDirectoryError) -> DomainError {
    warn!(error = %err, "user directory lookup failed");
    DomainError::dependency_failure(format!("user directory unavailable: {err}"))
}
