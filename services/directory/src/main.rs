//! User directory entry point: seeds the registry and serves lookups.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use service_core::health::HealthState;
use user_directory::domain::UserRegistry;
use user_directory::server::{create_server, DirectorySettings, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DirectorySettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let registry = UserRegistry::with_seed()
        .map_err(|e| std::io::Error::other(format!("invalid seed data: {e}")))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state,
        ServerConfig::new(settings.bind_addr(), registry),
    )?;
    server.await
}
