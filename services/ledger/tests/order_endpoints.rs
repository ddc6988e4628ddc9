//! End-to-end coverage of the ledger's HTTP surface through the real
//! application wiring, with the directory port swapped for in-process
//! stand-ins.

use std::sync::Arc;

use actix_web::{http::StatusCode, test as actix_test, web};
use async_trait::async_trait;
use serde_json::{json, Value};

use order_ledger::domain::ports::{FixtureUserDirectory, UserDirectory, UserDirectoryError};
use order_ledger::domain::OrderLedger;
use order_ledger::server::build_app;
use service_core::health::HealthState;
use service_core::{User, UserId};

/// Directory stand-in that fails every lookup, as an outage would.
struct OutageDirectory;

#[async_trait]
impl UserDirectory for OutageDirectory {
    async fn lookup_user(&self, _id: &UserId) -> Result<Option<User>, UserDirectoryError> {
        Err(UserDirectoryError::transport("connection refused"))
    }
}

fn seeded_parts() -> (web::Data<OrderLedger>, web::Data<HealthState>) {
    let john = User::try_from_strings("1", "John Doe", "john@example.com").expect("valid user");
    let directory = FixtureUserDirectory::with_users(vec![john]);
    parts_with(Arc::new(directory))
}

fn outage_parts() -> (web::Data<OrderLedger>, web::Data<HealthState>) {
    parts_with(Arc::new(OutageDirectory))
}

fn parts_with(
    directory: Arc<dyn UserDirectory>,
) -> (web::Data<OrderLedger>, web::Data<HealthState>) {
    let ledger = web::Data::new(OrderLedger::new(directory));
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    (ledger, health)
}

fn laptop_body() -> Value {
    json!({ "userId": "1", "product": "Laptop", "quantity": 1, "total": 999 })
}

#[actix_web::test]
async fn creating_an_order_for_a_known_user_is_a_201() {
    let (ledger, health) = seeded_parts();
    let app = actix_test::init_service(build_app(ledger, health)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/orders")
            .set_json(laptop_body())
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(res.headers().contains_key("trace-id"));
    let value: Value = actix_test::read_body_json(res).await;
    assert_eq!(value.get("success").and_then(Value::as_bool), Some(true));
    let data = value.get("data").expect("data field");
    assert_eq!(data.get("userId").and_then(Value::as_str), Some("1"));
    assert_eq!(data.get("product").and_then(Value::as_str), Some("Laptop"));
    assert_eq!(data.get("quantity").and_then(Value::as_u64), Some(1));
}

#[actix_web::test]
async fn unknown_user_is_an_enveloped_404() {
    let (ledger, health) = seeded_parts();
    let app = actix_test::init_service(build_app(ledger.clone(), health)).await;

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
    assert_eq!(value.get("success").and_then(Value::as_bool), Some(false));
    assert_eq!(
        value.get("error").and_then(Value::as_str),
        Some("User not found")
    );
    assert_eq!(ledger.order_count().await, 0);
}

#[actix_web::test]
async fn directory_outage_is_a_502_and_nothing_is_recorded() {
    let (ledger, health) = outage_parts();
    let app = actix_test::init_service(build_app(ledger.clone(), health)).await;

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
        Some("User not found"),
        "an outage must not masquerade as a missing user"
    );
    assert_eq!(ledger.order_count().await, 0);
}

#[actix_web::test]
async fn malformed_json_is_an_enveloped_400() {
    let (ledger, health) = seeded_parts();
    let app = actix_test::init_service(build_app(ledger, health)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/orders")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(res).await;
    assert_eq!(value.get("success").and_then(Value::as_bool), Some(false));
    assert!(value.get("error").and_then(Value::as_str).is_some());
}

#[actix_web::test]
async fn created_orders_show_up_in_the_listing() {
    let (ledger, health) = seeded_parts();
    let app = actix_test::init_service(build_app(ledger, health)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/orders")
            .set_json(laptop_body())
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/orders").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let value: Value = actix_test::read_body_json(res).await;
    let data = value
        .get("data")
        .and_then(Value::as_array)
        .expect("orders array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].get("product").and_then(Value::as_str), Some("Laptop"));
}

#[actix_web::test]
async fn health_probes_answer_through_the_same_app() {
    let (ledger, health) = seeded_parts();
    let app = actix_test::init_service(build_app(ledger, health)).await;

    for path in ["/health/ready", "/health/live"] {
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri(path).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK, "probe {path} should be 200");
    }
}
