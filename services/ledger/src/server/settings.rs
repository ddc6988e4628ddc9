//! Ledger configuration loaded via OrthoConfig.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Fallback listen port used when `LEDGER_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8082;

/// Fallback directory base URL used when `LEDGER_DIRECTORY_URL` is unset.
pub const DEFAULT_DIRECTORY_URL: &str = "http://127.0.0.1:8081";

/// Fallback lookup timeout, in seconds.
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 3;

/// Configuration values consumed at process start.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LEDGER")]
pub struct LedgerSettings {
    /// TCP port the HTTP listener binds to.
    #[ortho_config(default = 8082)]
    pub port: u16,
    /// Base URL of the user directory service.
    pub directory_url: Option<String>,
    /// Bound on each directory lookup, in whole seconds.
    #[ortho_config(default = 3)]
    pub lookup_timeout_secs: u64,
}

impl LedgerSettings {
    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Directory base URL, falling back to the local default.
    #[must_use]
    pub fn directory_url(&self) -> &str {
        self.directory_url.as_deref().unwrap_or(DEFAULT_DIRECTORY_URL)
    }

    /// Bounded wait applied to each directory lookup.
    #[must_use]
    pub const fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }
}
