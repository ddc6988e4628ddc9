//! Order data model.
//!
//! Orders are immutable once created: the ledger mints an identifier,
//! appends the record, and never updates it. Lifetime is the process
//! lifetime; no persistence contract is claimed.

use std::fmt;

use serde::{Deserialize, Serialize};
use service_core::{UserId, UserValidationError};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by [`OrderDraft::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderValidationError {
    /// The referenced user identifier failed presence checks.
    #[error(transparent)]
    UserId(#[from] UserValidationError),
    /// The product name was empty once trimmed.
    #[error("product must not be empty")]
    EmptyProduct,
    /// The quantity was zero; orders must carry at least one unit.
    #[error("quantity must be greater than zero")]
    ZeroQuantity,
    /// The total was negative or not a finite number.
    #[error("total must be a non-negative number")]
    InvalidTotal,
}

/// Generated order identifier, unique per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Mint a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Validated order request, ready to be accepted once the referenced user
/// is confirmed to exist.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    user_id: UserId,
    product: String,
    quantity: u32,
    total: f64,
}

impl OrderDraft {
    /// Validate and construct a draft from raw inputs.
    pub fn try_new(
        user_id: impl Into<String>,
        product: impl Into<String>,
        quantity: u32,
        total: f64,
    ) -> Result<Self, OrderValidationError> {
        let user_id = UserId::new(user_id)?;
        let product = product.into();
        if product.trim().is_empty() {
            return Err(OrderValidationError::EmptyProduct);
        }
        if quantity == 0 {
            return Err(OrderValidationError::ZeroQuantity);
        }
        if !total.is_finite() || total < 0.0 {
            return Err(OrderValidationError::InvalidTotal);
        }
        Ok(Self {
            user_id,
            product,
            quantity,
            total,
        })
    }

    /// Identifier of the user this draft references.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

/// An accepted order.
///
/// ## Invariants
/// - `user_id` referenced a directory user at the moment of creation; no
///   later guarantee is made (no foreign keys, no cascade).
/// - `quantity` > 0 and `total` ≥ 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "OrderDto", into = "OrderDto")]
#[schema(rename_all = "camelCase")]
pub struct Order {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: OrderId,
    #[schema(value_type = String, example = "1")]
    user_id: UserId,
    #[schema(example = "Laptop")]
    product: String,
    #[schema(example = 1, minimum = 1)]
    quantity: u32,
    #[schema(example = 999.0, minimum = 0.0)]
    total: f64,
}

impl Order {
    /// Build an order by attaching a minted identifier to a validated
    /// draft.
    #[must_use]
    pub fn new(id: OrderId, draft: OrderDraft) -> Self {
        let OrderDraft {
            user_id,
            product,
            quantity,
            total,
        } = draft;
        Self {
            id,
            user_id,
            product,
            quantity,
            total,
        }
    }

    /// Generated order identifier.
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Identifier of the user that placed the order.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Ordered product name.
    #[must_use]
    pub fn product(&self) -> &str {
        self.product.as_str()
    }

    /// Number of units ordered.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Order total.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }
}

/// Wire shape of an order record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderDto {
    id: OrderId,
    user_id: String,
    product: String,
    quantity: u32,
    total: f64,
}

impl From<Order> for OrderDto {
    fn from(value: Order) -> Self {
        let Order {
            id,
            user_id,
            product,
            quantity,
            total,
        } = value;
        Self {
            id,
            user_id: user_id.into(),
            product,
            quantity,
            total,
        }
    }
}

impl TryFrom<OrderDto> for Order {
    type Error = OrderValidationError;

    fn try_from(value: OrderDto) -> Result<Self, Self::Error> {
        let OrderDto {
            id,
            user_id,
            product,
            quantity,
            total,
        } = value;
        let draft = OrderDraft::try_new(user_id, product, quantity, total)?;
        Ok(Order::new(id, draft))
    }
}
