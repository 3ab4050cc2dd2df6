//! Application settings and the server configuration derived from them.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use userbase::domain::DEFAULT_MAX_WRITE_ATTEMPTS;

const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_BIND_PORT: u16 = 8080;

/// Settings loaded from CLI flags, `USERBASE_*` environment variables and an
/// optional configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERBASE")]
pub struct AppSettings {
    /// Address to listen on.
    pub bind_host: Option<IpAddr>,
    /// Port to listen on.
    pub bind_port: Option<u16>,
    /// Attempts made by read-modify-write operations before giving up with
    /// a conflict.
    pub max_write_attempts: Option<u32>,
    /// Create a couple of linked demo users at startup.
    #[ortho_config(default = false)]
    pub seed_demo_data: bool,
}

impl AppSettings {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.bind_host.unwrap_or(DEFAULT_BIND_HOST),
            self.bind_port.unwrap_or(DEFAULT_BIND_PORT),
        )
    }

    pub fn max_write_attempts(&self) -> u32 {
        self.max_write_attempts
            .unwrap_or(DEFAULT_MAX_WRITE_ATTEMPTS)
            .max(1)
    }
}

/// Resolved configuration used to create the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) max_write_attempts: u32,
    pub(crate) seed_demo_data: bool,
}

impl From<&AppSettings> for ServerConfig {
    fn from(settings: &AppSettings) -> Self {
        Self {
            bind_addr: settings.bind_addr(),
            max_write_attempts: settings.max_write_attempts(),
            seed_demo_data: settings.seed_demo_data,
        }
    }
}
