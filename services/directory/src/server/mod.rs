//! Server construction and middleware wiring.

mod settings;

pub use settings::{DirectorySettings, DEFAULT_PORT};

use std::net::SocketAddr;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::domain::UserRegistry;
use crate::inbound::http::users::{get_user, list_users};
use service_core::envelope::json_error_handler;
use service_core::health::{live, ready, HealthState};
use service_core::Trace;

/// Configuration for creating the directory HTTP server.
pub struct ServerConfig {
    bind_addr: SocketAddr,
    registry: UserRegistry,
}

impl ServerConfig {
    /// Construct a server configuration over a user registry.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr, registry: UserRegistry) -> Self {
        Self {
            bind_addr,
            registry,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Assemble the directory application: envelope-aware JSON extraction,
/// trace middleware, user routes, and health probes.
pub fn build_app(
    registry: web::Data<UserRegistry>,
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
        .app_data(registry)
        .app_data(health_state)
        .wrap(Trace)
        .service(get_user)
        .service(list_users)
        .service(ready)
        .service(live)
}

/// Construct the Actix HTTP server for the directory.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        registry,
    } = config;
    let registry = web::Data::new(registry);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(registry.clone(), server_health_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "user directory listening");
    health_state.mark_ready();
    Ok(server)
}
