//! Order ledger entry point: wires the directory client and serves orders.

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use url::Url;
use tracing_subscriber::{fmt, EnvFilter};

use order_ledger::domain::OrderLedger;
use order_ledger::outbound::HttpUserDirectory;
use order_ledger::server::{create_server, LedgerSettings, ServerConfig};
use service_core::health::HealthState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = LedgerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let directory_url = Url::parse(settings.directory_url())
        .map_err(|e| std::io::Error::other(format!("invalid directory URL: {e}")))?;
    let directory = HttpUserDirectory::new(directory_url, settings.lookup_timeout())
        .map_err(|e| std::io::Error::other(format!("failed to build directory client: {e}")))?;
    let ledger = OrderLedger::new(Arc::new(directory));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state,
        ServerConfig::new(settings.bind_addr(), ledger),
    )?;
    server.await
}
