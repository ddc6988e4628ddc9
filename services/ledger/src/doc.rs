//! OpenAPI documentation for the ledger's REST surface.

use service_core::{ErrorEnvelope, User};
use utoipa::OpenApi;

use crate::domain::Order;
use crate::inbound::http::orders::{CreateOrderRequest, OrderDetailBody};

/// OpenAPI document for the order ledger API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order ledger API",
        description = "Order intake that verifies users against the directory."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::orders::create_order,
        crate::inbound::http::orders::list_orders,
        crate::inbound::http::orders::get_order,
        service_core::health::ready,
        service_core::health::live,
    ),
    components(schemas(Order, User, CreateOrderRequest, OrderDetailBody, ErrorEnvelope)),
    tags(
        (name = "orders", description = "Operations related to orders"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
