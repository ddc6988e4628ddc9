//! Server construction and middleware wiring.

mod settings;

pub use settings::{
    LedgerSettings, DEFAULT_DIRECTORY_URL, DEFAULT_LOOKUP_TIMEOUT_SECS, DEFAULT_PORT,
};

use std::net::SocketAddr;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::domain::OrderLedger;
use crate::inbound::http::orders::{create_order, get_order, list_orders};
use service_core::envelope::json_error_handler;
use service_core::health::{live, ready, HealthState};
use service_core::Trace;

/// Configuration for creating the ledger HTTP server.
pub struct ServerConfig {
    bind_addr: SocketAddr,
    ledger: OrderLedger,
}

impl ServerConfig {
    /// Construct a server configuration over an order ledger.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr, ledger: OrderLedger) -> Self {
        Self { bind_addr, ledger }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Assemble the ledger application: envelope-aware JSON extraction, trace
/// middleware, order routes, and health probes.
pub fn build_app(
    ledger: web::Data<OrderLedger>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(ledger)
        .app_data(health_state)
        .wrap(Trace)
        .service(create_order)
        .service(list_orders)
        .service(get_order)
        .service(ready)
        .service(live)
}

/// Construct the Actix HTTP server for the ledger.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, ledger } = config;
    let ledger = web::Data::new(ledger);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(ledger.clone(), server_health_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "order ledger listening");
    health_state.mark_ready();
    Ok(server)
}
