//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

use riskdash_analytics::DashboardConfig;
use riskdash_ext_file::DEFAULT_DATA_FILE;

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Observation table (CSV)
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Load the table at startup instead of on the first request
    #[serde(default = "default_true")]
    pub preload: bool,

    /// View settings
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
            preload: true,
            dashboard: DashboardConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// Rejects a `host` that is neither an IP address nor `localhost`.
    pub fn from_toml(content: &str) -> Result<Self, std::io::Error> {
        let config: Self =
            toml::from_str(content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        config.socket_addr()?;
        Ok(config)
    }

    /// Address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::io::Error> {
        let ip = match self.host.as_str() {
            "localhost" => IpAddr::V4(Ipv4Addr::LOCALHOST),
            host => host.parse::<IpAddr>().map_err(|_| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("host must be an IP address or localhost, got '{host}'"),
                )
            })?,
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}
