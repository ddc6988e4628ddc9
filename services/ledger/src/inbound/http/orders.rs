//! Orders API handlers.
//!
//! ```text
//! POST /orders {"userId":"1","product":"Laptop","quantity":1,"total":999}
//! GET /orders
//! GET /orders/{orderId}
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use service_core::{ApiError, ApiResult, Envelope, ErrorEnvelope, User};

use crate::domain::{Order, OrderDetail, OrderDraft, OrderId, OrderLedger};

/// Order creation request body for `POST /orders`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Identifier of the user placing the order.
    #[schema(example = "1")]
    pub user_id: String,
    /// Product name.
    #[schema(example = "Laptop")]
    pub product: String,
    /// Number of units; must be greater than zero.
    #[schema(example = 1, minimum = 1)]
    pub quantity: u32,
    /// Order total; must be non-negative.
    #[schema(example = 999.0, minimum = 0.0)]
    pub total: f64,
}

impl TryFrom<CreateOrderRequest> for OrderDraft {
    type Error = crate::domain::OrderValidationError;

    fn try_from(value: CreateOrderRequest) -> Result<Self, Self::Error> {
        Self::try_new(value.user_id, value.product, value.quantity, value.total)
    }
}

/// Order detail payload joining the stored order with the directory's
/// current view of its user.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct OrderDetailBody {
    /// The stored order.
    #[serde(flatten)]
    pub order: Order,
    /// The user as the directory reports it now; `null` once the
    /// directory no longer knows the identifier.
    pub user: Option<User>,
}

impl From<OrderDetail> for OrderDetailBody {
    fn from(value: OrderDetail) -> Self {
        Self {
            order: value.order,
            user: value.user,
        }
    }
}

/// Create an order after confirming the referenced user exists.
///
/// A missing user is a 404; a directory outage is a 502. The two are
/// never conflated: a 404 always means the identifier is wrong, not that
/// the directory was down.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order accepted", body = Order),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 404, description = "User not found", body = ErrorEnvelope),
        (status = 502, description = "User directory unreachable", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["orders"],
    operation_id = "createOrder"
)]
#[post("/orders")]
pub async fn create_order(
    ledger: web::Data<OrderLedger>,
    payload: web::Json<CreateOrderRequest>,
) -> ApiResult<HttpResponse> {
    let draft = OrderDraft::try_from(payload.into_inner())
        .map_err(|err| ApiError::invalid_request(err.to_string()))?;
    let order = ledger.create_order(draft).await?;
    Ok(HttpResponse::Created().json(Envelope::ok(order)))
}

/// List all accepted orders in arrival order.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All accepted orders", body = [Order])
    ),
    tags = ["orders"],
    operation_id = "listOrders"
)]
#[get("/orders")]
pub async fn list_orders(ledger: web::Data<OrderLedger>) -> web::Json<Envelope<Vec<Order>>> {
    web::Json(Envelope::ok(ledger.list_orders().await))
}

/// Fetch one order joined with its user.
#[utoipa::path(
    get,
    path = "/orders/{orderId}",
    params(("orderId" = String, Path, description = "Generated order identifier")),
    responses(
        (status = 200, description = "Order found", body = OrderDetailBody),
        (status = 404, description = "Order not found", body = ErrorEnvelope),
        (status = 502, description = "User directory unreachable", body = ErrorEnvelope)
    ),
    tags = ["orders"],
    operation_id = "getOrder"
)]
#[get("/orders/{order_id}")]
pub async fn get_order(
    ledger: web::Data<OrderLedger>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Envelope<OrderDetailBody>>> {
    let raw = path.into_inner();
    let id: OrderId = raw
        .parse()
        .map_err(|_| ApiError::not_found("Order not found"))?;
    let detail = ledger.order_detail(id).await?;
    Ok(web::Json(Envelope::ok(detail.into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{FixtureUserDirectory, MockUserDirectory, UserDirectoryError};
    use actix_web::{http::StatusCode, test as actix_test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn seeded_ledger() -> web::Data<OrderLedger> {
        let john =
            User::try_from_strings("1", "John Doe", "john@example.com").expect("valid user");
        let directory = FixtureUserDirectory::with_users(vec![john]);
        web::Data::new(OrderLedger::new(Arc::new(directory)))
    }

    fn outage_ledger() -> web::Data<OrderLedger> {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_lookup_user()
            .returning(|_| Err(UserDirectoryError::timeout("deadline elapsed")));
        web::Data::new(OrderLedger::new(Arc::new(directory)))
    }

    async fn spawn_app(
        ledger: web::Data<OrderLedger>,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        actix_test::init_service(
            App::new()
                .app_data(ledger)
                .service(create_order)
                .service(list_orders)
                .service(get_order),
        )
        .await
    }

    fn laptop_body() -> Value {
        json!({ "userId": "1", "product": "Laptop", "quantity": 1, "total": 999 })
    }

    #[actix_web::test]
    async fn creating_an_order_returns_201_with_envelope() {
        let app = spawn_app(seeded_ledger()).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/orders")
                .set_json(laptop_body())
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value.get("success").and_then(Value::as_bool), Some(true));
        let data = value.get("data").expect("data field");
        assert_eq!(data.get("userId").and_then(Value::as_str), Some("1"));
        assert_eq!(data.get("product").and_then(Value::as_str), Some("Laptop"));
        assert!(data.get("id").and_then(Value::as_str).is_some());
    }

    #[actix_web::test]
    async fn unknown_user_answers_404_and_keeps_the_ledger_empty() {
        let ledger = seeded_ledger();
        let app = spawn_app(ledger.clone()).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/orders")
                .set_json(json!({
                    "userId": "999", "product": "Laptop", "quantity": 1, "total": 999
                }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            value.get("error").and_then(Value::as_str),
            Some("User not found")
        );
        assert_eq!(ledger.order_count().await, 0);
    }

    #[actix_web::test]
    async fn directory_outage_answers_502_distinct_from_404() {
        let ledger = outage_ledger();
        let app = spawn_app(ledger.clone()).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/orders")
                .set_json(laptop_body())
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value.get("success").and_then(Value::as_bool), Some(false));
        assert_ne!(
            value.get("error").and_then(Value::as_str),
            Some("User not found")
        );
        assert_eq!(ledger.order_count().await, 0);
    }

    #[actix_web::test]
    async fn invalid_quantity_is_rejected_before_any_lookup() {
        let ledger = seeded_ledger();
        let app = spawn_app(ledger.clone()).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/orders")
                .set_json(json!({
                    "userId": "1", "product": "Laptop", "quantity": 0, "total": 999
                }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ledger.order_count().await, 0);
    }

    #[actix_web::test]
    async fn listing_reflects_created_orders() {
        let ledger = seeded_ledger();
        let app = spawn_app(ledger.clone()).await;

        for _ in 0..2 {
            let res = actix_test::call_service(
                &app,
                actix_test::TestRequest::post()
                    .uri("/orders")
                    .set_json(laptop_body())
                    .to_request(),
            )
            .await;
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/orders").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(res).await;
        let data = value.get("data").and_then(Value::as_array).expect("array");
        assert_eq!(data.len(), 2);
    }

    #[actix_web::test]
    async fn order_detail_embeds_the_user() {
        let ledger = seeded_ledger();
        let app = spawn_app(ledger.clone()).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/orders")
                .set_json(laptop_body())
                .to_request(),
        )
        .await;
        let created: Value = actix_test::read_body_json(res).await;
        let order_id = created
            .get("data")
            .and_then(|d| d.get("id"))
            .and_then(Value::as_str)
            .expect("order id")
            .to_owned();

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/orders/{order_id}"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(res).await;
        let data = value.get("data").expect("data field");
        assert_eq!(data.get("id").and_then(Value::as_str), Some(order_id.as_str()));
        let user = data.get("user").expect("user field");
        assert_eq!(user.get("name").and_then(Value::as_str), Some("John Doe"));
    }

    #[actix_web::test]
    async fn unknown_order_detail_is_404() {
        let app = spawn_app(seeded_ledger()).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/orders/3fa85f64-5717-4562-b3fc-2c963f66afa6")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn non_uuid_order_ids_read_as_not_found() {
        let app = spawn_app(seeded_ledger()).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/orders/not-a-uuid")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
