//! Directory configuration loaded via OrthoConfig.

use std::net::{Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Fallback listen port used when `DIRECTORY_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8081;

/// Configuration values consumed at process start.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIRECTORY")]
pub struct DirectorySettings {
    /// TCP port the HTTP listener binds to.
    #[ortho_config(default = 8081)]
    pub port: u16,
}

impl DirectorySettings {
    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;

    fn load_from_empty_args() -> DirectorySettings {
        DirectorySettings::load_from_iter([OsString::from("user-directory")])
            .expect("config should load")
    }

    #[test]
    fn default_port_is_used_when_unset() {
        let _guard = lock_env([("DIRECTORY_PORT", None::<String>)]);

        let settings = load_from_empty_args();
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.bind_addr().port(), DEFAULT_PORT);
    }

    #[test]
    fn environment_override_is_respected() {
        let _guard = lock_env([("DIRECTORY_PORT", Some("9090".to_owned()))]);

        let settings = load_from_empty_args();
        assert_eq!(settings.port, 9090);
    }
}
